/// Tests for chart rendering
#[cfg(test)]
mod tests {
    use crate::chart::render_chart;
    use crate::error::{BirthdayError, Result};
    use crate::plotter::ChartRenderer;
    use crate::profile::Profile;
    use crate::report::{Row, build_rows};
    use std::cell::RefCell;
    use std::fs;
    use std::path::{Path, PathBuf};

    /// Copies the CSV it is given to the output and remembers the input path
    #[derive(Default)]
    struct FakeRenderer {
        seen_input: RefCell<Option<PathBuf>>,
        input_contents: RefCell<String>,
        fail: bool,
    }

    impl ChartRenderer for FakeRenderer {
        fn render_vector_chart(&self, input: &Path, output: &Path) -> Result<()> {
            *self.seen_input.borrow_mut() = Some(input.to_path_buf());
            *self.input_contents.borrow_mut() = fs::read_to_string(input)?;
            if self.fail {
                fs::write(output, "<svg partial")?;
                return Err(BirthdayError::ExternalTool("fake renderer failed".to_string()));
            }
            fs::write(output, "<svg/>")?;
            Ok(())
        }
    }

    fn chart_rows() -> Vec<Row> {
        build_rows(&Profile::Chart.spec()).unwrap()
    }

    fn dir_entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> =
            fs::read_dir(dir).unwrap().map(|e| e.unwrap().file_name().to_string_lossy().to_string()).collect();
        names.sort();
        names
    }

    #[test]
    fn test_chart_written_to_destination() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("out.svg");
        let renderer = FakeRenderer::default();

        render_chart(&destination, &chart_rows(), &renderer).unwrap();

        assert_eq!(fs::read_to_string(&destination).unwrap(), "<svg/>");
        assert_eq!(dir_entries(dir.path()), vec!["out.svg".to_string()]);
    }

    #[test]
    fn test_renderer_receives_full_csv() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = FakeRenderer::default();

        render_chart(&dir.path().join("out.svg"), &chart_rows(), &renderer).unwrap();

        let csv = renderer.input_contents.borrow();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 51);
        assert_eq!(lines[0], "Number of People,Probability,Percent");
        assert!(lines[50].starts_with("50,"));
        assert!(!csv.contains("..."));
    }

    #[test]
    fn test_transient_file_removed_after_success() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = FakeRenderer::default();

        render_chart(&dir.path().join("out.svg"), &chart_rows(), &renderer).unwrap();

        let input = renderer.seen_input.borrow().clone().unwrap();
        assert!(!input.exists(), "transient CSV should be removed: {}", input.display());
    }

    #[test]
    fn test_failure_leaves_nothing_behind() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("out.svg");
        let renderer = FakeRenderer { fail: true, ..Default::default() };

        let err = render_chart(&destination, &chart_rows(), &renderer).unwrap_err();

        assert!(matches!(err, BirthdayError::ExternalTool(_)));
        assert!(!destination.exists());
        assert!(dir_entries(dir.path()).is_empty(), "no staging files should remain");

        let input = renderer.seen_input.borrow().clone().unwrap();
        assert!(!input.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_new_chart_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("out.svg");

        render_chart(&destination, &chart_rows(), &FakeRenderer::default()).unwrap();

        let mode = fs::metadata(&destination).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn test_existing_destination_mode_kept() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("out.svg");
        fs::write(&destination, "previous").unwrap();
        fs::set_permissions(&destination, fs::Permissions::from_mode(0o640)).unwrap();

        render_chart(&destination, &chart_rows(), &FakeRenderer::default()).unwrap();

        let mode = fs::metadata(&destination).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
        assert_eq!(fs::read_to_string(&destination).unwrap(), "<svg/>");
    }

    #[test]
    fn test_failure_keeps_existing_destination() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("out.svg");
        fs::write(&destination, "previous").unwrap();
        let renderer = FakeRenderer { fail: true, ..Default::default() };

        assert!(render_chart(&destination, &chart_rows(), &renderer).is_err());
        assert_eq!(fs::read_to_string(&destination).unwrap(), "previous");
    }
}
