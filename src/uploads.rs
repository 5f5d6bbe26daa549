use std::path::{Path, PathBuf};

use axum::http::HeaderMap;
use uuid::Uuid;

/// A file pulled out of a multipart upload.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: bytes::Bytes,
}

#[derive(Debug, Default)]
pub struct UploadForm {
    pub document_type: Option<String>,
    pub files: Vec<UploadedFile>,
}

/// Read a `multipart/form-data` upload: a `documentType` text field plus any number of files.
pub async fn read_form(headers: &HeaderMap, body: bytes::Bytes) -> Result<UploadForm, String> {
    let boundary = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| multer::parse_boundary(ct).ok())
        .ok_or_else(|| "Expected multipart/form-data".to_string())?;

    let stream = futures_util::stream::once(async { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut form = UploadForm::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Multipart error: {e}"))?
    {
        match field.file_name().map(|s| s.to_string()) {
            Some(filename) => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| format!("File read error: {e}"))?;
                form.files.push(UploadedFile { filename, bytes });
            }
            None if field.name() == Some("documentType") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| format!("Field read error: {e}"))?;
                form.document_type = Some(value.trim().to_string()).filter(|s| !s.is_empty());
            }
            None => {}
        }
    }
    Ok(form)
}

/// Replace anything outside `[A-Za-z0-9._-]` and strip leading dots, so the
/// result is a single safe path component.
pub fn sanitize(component: &str) -> String {
    let base = component.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned.to_string()
    }
}

/// Writes uploaded documents under `<root>/<user>/<document type>/`.
pub struct DocumentStorage {
    root: PathBuf,
}

impl DocumentStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Store one file and return its path relative to the root, using `/` separators.
    pub async fn save(
        &self,
        user_id: Uuid,
        document_type: &str,
        file: &UploadedFile,
    ) -> std::io::Result<String> {
        let user_dir = user_id.to_string();
        let type_dir = sanitize(document_type);
        let name = format!("{}-{}", Uuid::now_v7().simple(), sanitize(&file.filename));

        let dir = self.root.join(&user_dir).join(&type_dir);
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(&name), &file.bytes).await?;

        Ok(format!("{user_dir}/{type_dir}/{name}"))
    }

    /// Delete a file written by [`save`](Self::save). Paths outside the root are ignored.
    pub async fn remove(&self, relative: &str) -> std::io::Result<()> {
        if relative.split('/').any(|part| part.is_empty() || part == "..") {
            return Ok(());
        }
        match tokio::fs::remove_file(self.root.join(relative)).await {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_paths_and_odd_characters() {
        assert_eq!(sanitize("../../etc/passwd"), "passwd");
        assert_eq!(sanitize("C:\\docs\\PAN card.pdf"), "PAN_card.pdf");
        assert_eq!(sanitize(".hidden"), "hidden");
        assert_eq!(sanitize(""), "file");
        assert_eq!(sanitize("Aadhar"), "Aadhar");
    }

    #[tokio::test]
    async fn save_writes_under_user_and_type() {
        let root = std::env::temp_dir().join(format!("ca_portal_storage_{}", Uuid::now_v7().simple()));
        let storage = DocumentStorage::new(&root);
        let user = Uuid::now_v7();
        let file = UploadedFile {
            filename: "pan.pdf".to_string(),
            bytes: bytes::Bytes::from_static(b"%PDF-1.4"),
        };

        let relative = storage.save(user, "PAN", &file).await.unwrap();
        assert!(relative.starts_with(&format!("{user}/PAN/")));
        assert!(relative.ends_with("-pan.pdf"));

        let written = tokio::fs::read(root.join(&relative)).await.unwrap();
        assert_eq!(written, b"%PDF-1.4");

        storage.remove(&relative).await.unwrap();
        assert!(!root.join(&relative).exists());
        // Already gone is fine.
        storage.remove(&relative).await.unwrap();
        storage.remove("../outside.txt").await.unwrap();

        tokio::fs::remove_dir_all(&root).await.ok();
    }
}
