use chrono::{DateTime, Utc};

use crate::models::user::UserRecord;

const WIDTH: usize = 60;
const TITLE: &str = "USER ACCOUNT REPORT";

/// Render the report for one run.
///
/// Pure and deterministic: the same records and timestamp always produce
/// byte-identical output. Layout, in order:
///
/// 1. banner header with the title
/// 2. `Generated on:` line (`YYYY-MM-DD HH:MM:SS UTC`) and record count
/// 3. one block per record listing ID, Name, Username, Email, Company,
///    City in that order
/// 4. total-count footer
///
/// An empty record set renders the header, a `No records fetched.` note,
/// and the footer with a zero count.
pub fn render(records: &[UserRecord], generated_at: DateTime<Utc>) -> String {
    let mut lines = Vec::new();

    lines.push("=".repeat(WIDTH));
    lines.push(format!("{:^WIDTH$}", TITLE));
    lines.push("=".repeat(WIDTH));
    lines.push(format!(
        "Generated on: {}",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    lines.push(format!("Records     : {}", records.len()));
    lines.push("-".repeat(WIDTH));

    if records.is_empty() {
        lines.push("No records fetched.".to_string());
    }

    for record in records {
        lines.push(format!("ID       : {}", record.id));
        lines.push(format!("Name     : {}", record.name));
        lines.push(format!("Username : {}", record.username));
        lines.push(format!("Email    : {}", record.email));
        lines.push(format!("Company  : {}", record.company_name));
        lines.push(format!("City     : {}", record.city));
        lines.push("-".repeat(30));
    }

    lines.push(format!("Total Users: {}", records.len()));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap()
    }

    fn sample_records() -> Vec<UserRecord> {
        vec![
            UserRecord {
                id: 1,
                name: "Leanne Graham".into(),
                username: "Bret".into(),
                email: "Sincere@april.biz".into(),
                company_name: "Romaguera-Crona".into(),
                city: "Gwenborough".into(),
            },
            UserRecord {
                id: 2,
                name: "Ervin Howell".into(),
                username: "Antonette".into(),
                email: "Shanna@melissa.tv".into(),
                company_name: "N/A".into(),
                city: "N/A".into(),
            },
        ]
    }

    #[test]
    fn test_render_is_deterministic() {
        let records = sample_records();
        let ts = fixed_timestamp();
        assert_eq!(render(&records, ts), render(&records, ts));
    }

    #[test]
    fn test_render_one_block_per_record_with_verbatim_values() {
        let report = render(&sample_records(), fixed_timestamp());

        assert_eq!(report.matches("ID       : ").count(), 2);
        assert!(report.contains("ID       : 1"));
        assert!(report.contains("Name     : Leanne Graham"));
        assert!(report.contains("Username : Bret"));
        assert!(report.contains("Email    : Sincere@april.biz"));
        assert!(report.contains("Company  : Romaguera-Crona"));
        assert!(report.contains("City     : Gwenborough"));
        assert!(report.contains("Company  : N/A"));
    }

    #[test]
    fn test_render_header_has_timestamp_and_count() {
        let report = render(&sample_records(), fixed_timestamp());
        assert!(report.contains("Generated on: 2024-01-15 09:30:00 UTC"));
        assert!(report.contains("Records     : 2"));
        assert!(report.contains("Total Users: 2"));
    }

    #[test]
    fn test_render_empty_input_is_header_only() {
        let report = render(&[], fixed_timestamp());
        assert!(report.contains("No records fetched."));
        assert!(report.contains("Records     : 0"));
        assert!(report.contains("Total Users: 0"));
        assert!(!report.contains("ID       : "));
    }

    #[test]
    fn test_render_field_order_within_block() {
        let report = render(&sample_records()[..1], fixed_timestamp());
        let id = report.find("ID       : ").unwrap();
        let name = report.find("Name     : ").unwrap();
        let username = report.find("Username : ").unwrap();
        let email = report.find("Email    : ").unwrap();
        let company = report.find("Company  : ").unwrap();
        let city = report.find("City     : ").unwrap();
        assert!(id < name && name < username && username < email);
        assert!(email < company && company < city);
    }

    #[test]
    fn test_records_appear_in_input_order() {
        let report = render(&sample_records(), fixed_timestamp());
        let first = report.find("Username : Bret").unwrap();
        let second = report.find("Username : Antonette").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_render_ends_with_newline() {
        assert!(render(&[], fixed_timestamp()).ends_with('\n'));
    }
}
