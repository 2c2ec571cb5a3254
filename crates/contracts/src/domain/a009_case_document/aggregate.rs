use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// File attached to a case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedFile {
    pub file_id: Uuid,
    pub file_name: String,
    #[serde(default)]
    pub size_in_bytes: u64,
    pub created_on: DateTime<Utc>,
    #[serde(default)]
    pub created_by: Option<String>,
}

impl RelatedFile {
    pub fn size_label(&self) -> String {
        format_file_size(self.size_in_bytes)
    }

    pub fn extension(&self) -> Option<&str> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
    }
}

/// `532 B`, `1.5 KB`, `2.0 MB`
pub fn format_file_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let size = bytes as f64;
    if size < KB {
        format!("{} B", bytes)
    } else if size < MB {
        format!("{:.1} KB", size / KB)
    } else if size < GB {
        format!("{:.1} MB", size / MB)
    } else {
        format!("{:.1} GB", size / GB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(532), "532 B");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(2 * 1024 * 1024), "2.0 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3.0 GB");
    }

    #[test]
    fn test_related_file_wire_format() {
        let file: RelatedFile = serde_json::from_value(json!({
            "fileId": "00000000-0000-0000-0000-00000000000a",
            "fileName": "scan.final.pdf",
            "sizeInBytes": 2048,
            "createdOn": "2024-03-01T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(file.size_label(), "2.0 KB");
        assert_eq!(file.extension(), Some("pdf"));
        assert!(file.created_by.is_none());
    }
}
