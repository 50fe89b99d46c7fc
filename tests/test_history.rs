use chrono::{Local, TimeZone};
use rpassgen::history::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_timestamp() -> chrono::DateTime<Local> {
        Local.with_ymd_and_hms(2025, 8, 5, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_record_newest_first() {
        let mut history = History::new();
        history.record("uno".to_string());
        history.record("dos".to_string());
        history.record("tres".to_string());
        assert_eq!(history.snapshot(), ["tres", "dos", "uno"]);
    }

    #[test]
    fn test_capacity_bound() {
        let mut history = History::new();
        for i in 0..15 {
            history.record(format!("pw{:02}", i));
        }
        assert_eq!(history.len(), MAX_HISTORY);
        assert_eq!(history.snapshot()[0], "pw14");
        assert_eq!(history.snapshot()[MAX_HISTORY - 1], "pw05");
    }

    #[test]
    fn test_export_text_format() {
        let mut history = History::new();
        history.record("primera".to_string());
        history.record("segunda".to_string());
        let text = history.export_text(fixed_timestamp());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "--- Historial de Contraseñas Generadas ---");
        assert_eq!(lines[1], "Fecha y Hora: 2025-08-05 10:30:00");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "segunda");
        assert_eq!(lines[4], "primera");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_export_round_trip() {
        let mut history = History::new();
        for i in 0..12 {
            history.record(format!("clave-{}", i));
        }
        let text = history.export_text(fixed_timestamp());
        let parsed: Vec<&str> = text.lines().skip(3).collect();
        assert_eq!(parsed, history.snapshot());
    }

    #[test]
    fn test_export_empty_history() {
        let history = History::new();
        let text = history.export_text(fixed_timestamp());
        assert!(text.ends_with("\n\n"));
        assert_eq!(text.lines().skip(3).count(), 0);
    }

    #[test]
    fn test_export_filename_pattern() {
        assert_eq!(
            History::export_filename(fixed_timestamp()),
            "password_history_20250805_103000.txt"
        );
    }

    #[test]
    fn test_save_in_writes_file() {
        let mut history = History::new();
        history.record("guardada".to_string());
        let dir = tempfile::tempdir().unwrap();
        let now = fixed_timestamp();

        let path = history.save_in(dir.path(), now).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "password_history_20250805_103000.txt"
        );
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, history.export_text(now));
    }

    #[test]
    fn test_save_in_missing_dir_is_io_error() {
        let mut history = History::new();
        history.record("perdida".to_string());
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-existe");
        assert!(history.save_in(&missing, fixed_timestamp()).is_err());
        // 失败不影响历史
        assert_eq!(history.len(), 1);
    }
}
