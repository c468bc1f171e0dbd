// Copyright (c) Microblog Team
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use tokio::fs;

/// Media file store. Files land under `<root>/<user_id>/`, keeping the
/// uploaded name; a same-named file already present for that user gets a
/// numeric suffix before the extension.
#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Write `bytes` under the owning user's directory and return the
    /// stored path. The returned string is what the media row records and
    /// what tweet attachments later carry verbatim.
    pub async fn save(
        &self,
        user_id: i32,
        filename: &str,
        bytes: &[u8],
    ) -> std::io::Result<String> {
        let dir = self.root.join(user_id.to_string());
        fs::create_dir_all(&dir).await?;

        let (stem, ext) = split_name(filename);
        let path = unique_path(&dir, stem, ext);

        fs::write(&path, bytes).await?;

        Ok(path.to_string_lossy().into_owned())
    }
}

/// Split a file name into stem and extension, the dot staying on the
/// extension. Names without a dot, and dotfiles, have no extension.
fn split_name(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(idx) if idx > 0 => filename.split_at(idx),
        _ => (filename, ""),
    }
}

fn unique_path(dir: &Path, stem: &str, ext: &str) -> PathBuf {
    let mut path = dir.join(format!("{stem}{ext}"));
    let mut counter = 1;

    while path.exists() {
        path = dir.join(format!("{stem}_{counter}{ext}"));
        counter += 1;
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn split_name_handles_the_usual_shapes() {
        assert_eq!(split_name("pic.jpg"), ("pic", ".jpg"));
        assert_eq!(split_name("archive.tar.gz"), ("archive.tar", ".gz"));
        assert_eq!(split_name("noext"), ("noext", ""));
        assert_eq!(split_name(".bashrc"), (".bashrc", ""));
        assert_eq!(split_name("trailing."), ("trailing", "."));
    }

    #[tokio::test]
    async fn saves_under_a_user_scoped_directory() {
        let dir = tempdir().unwrap();
        let store = MediaStore::new(dir.path());

        let path = store.save(7, "pic.jpg", b"bytes").await.unwrap();

        assert_eq!(
            PathBuf::from(&path),
            dir.path().join("7").join("pic.jpg")
        );
        assert_eq!(std::fs::read(&path).unwrap(), b"bytes");
    }

    #[tokio::test]
    async fn collisions_get_numeric_suffixes_in_order() {
        let dir = tempdir().unwrap();
        let store = MediaStore::new(dir.path());

        let first = store.save(1, "pic.jpg", b"a").await.unwrap();
        let second = store.save(1, "pic.jpg", b"b").await.unwrap();
        let third = store.save(1, "pic.jpg", b"c").await.unwrap();

        assert!(first.ends_with("pic.jpg"));
        assert!(second.ends_with("pic_1.jpg"));
        assert!(third.ends_with("pic_2.jpg"));
        assert_eq!(std::fs::read(&first).unwrap(), b"a");
        assert_eq!(std::fs::read(&third).unwrap(), b"c");
    }

    #[tokio::test]
    async fn same_name_for_different_users_never_collides() {
        let dir = tempdir().unwrap();
        let store = MediaStore::new(dir.path());

        let one = store.save(1, "pic.jpg", b"a").await.unwrap();
        let two = store.save(2, "pic.jpg", b"b").await.unwrap();

        assert!(one.ends_with("pic.jpg"));
        assert!(two.ends_with("pic.jpg"));
        assert_ne!(one, two);
    }

    #[tokio::test]
    async fn extensionless_names_still_disambiguate() {
        let dir = tempdir().unwrap();
        let store = MediaStore::new(dir.path());

        let first = store.save(1, "data", b"a").await.unwrap();
        let second = store.save(1, "data", b"b").await.unwrap();

        assert!(first.ends_with("data"));
        assert!(second.ends_with("data_1"));
    }
}
