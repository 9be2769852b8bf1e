//! 상태 출력

use servicehub_core::ServiceStat;

/// 서비스 상태 출력 (표 또는 JSON)
pub fn print_status(stats: &[ServiceStat], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
    } else {
        print!("{}", format_table(stats));
    }
    Ok(())
}

fn format_table(stats: &[ServiceStat]) -> String {
    if stats.is_empty() {
        return "No services registered\n".to_string();
    }

    let id_width = stats
        .iter()
        .map(|s| s.id.len())
        .max()
        .unwrap_or(0)
        .max("ID".len());

    let mut out = format!("{:<id_width$}  {:<12}  {}\n", "ID", "STATE", "LANGUAGES");
    for stat in stats {
        let languages = if stat.language_ids.is_empty() {
            "-".to_string()
        } else {
            stat.language_ids.join(", ")
        };
        out.push_str(&format!(
            "{:<id_width$}  {:<12}  {}\n",
            stat.id, stat.state, languages
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(id: &str, state: &str, languages: &[&str]) -> ServiceStat {
        ServiceStat {
            id: id.to_string(),
            state: state.to_string(),
            language_ids: languages.iter().map(|l| l.to_string()).collect(),
        }
    }

    #[test]
    fn test_format_table() {
        let table = format_table(&[
            stat("gopls", "running", &["go"]),
            stat("rust-analyzer", "init", &["rust"]),
            stat("watcher", "stopped", &[]),
        ]);

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID             STATE"));
        assert_eq!(lines[1], "gopls          running       go");
        assert_eq!(lines[3], "watcher        stopped       -");
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_table(&[]), "No services registered\n");
    }
}
