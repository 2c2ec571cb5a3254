use crate::shared::api_utils::{delete, get_bytes, get_json, upload_file};
use contracts::domain::a009_case_document::RelatedFile;
use uuid::Uuid;

fn base(case_id: Uuid) -> String {
    format!("/api/v1/document/{}/related-file", case_id)
}

pub async fn fetch_files(case_id: Uuid) -> Result<Vec<RelatedFile>, String> {
    get_json(&base(case_id)).await
}

pub async fn upload(case_id: Uuid, file: &web_sys::File) -> Result<(), String> {
    upload_file(&base(case_id), file).await
}

pub async fn delete_file(case_id: Uuid, file_id: Uuid) -> Result<(), String> {
    delete(&format!("{}/{}", base(case_id), file_id)).await
}

pub async fn download(file_id: Uuid) -> Result<Vec<u8>, String> {
    get_bytes(&format!("/api/v1/resource/{}/download", file_id)).await
}
