use aws_sdk_s3 as s3;
use aws_sdk_s3::presigning::PresigningConfig;
use std::time::Duration;

use crate::config::StorageConfig;

/// A stored gallery path. Current rows hold a bare object key; rows written
/// before the storage migration hold the full public URL of the old
/// convention (`…/object/<bucket>/<key>`, sometimes with a `public/` segment
/// before the bucket).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredImagePath {
    StorageKey(String),
    LegacyUrl(String),
}

impl StoredImagePath {
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            StoredImagePath::LegacyUrl(raw.to_string())
        } else {
            StoredImagePath::StorageKey(raw.to_string())
        }
    }

    /// Object key within the bucket, if one can be recovered.
    pub fn key(&self) -> Option<&str> {
        match self {
            StoredImagePath::StorageKey(key) => {
                if key.is_empty() {
                    None
                } else {
                    Some(key)
                }
            }
            StoredImagePath::LegacyUrl(url) => {
                let (_, rest) = url.split_once("/object/")?;
                let rest = rest.strip_prefix("public/").unwrap_or(rest);
                let (_bucket, key) = rest.split_once('/')?;
                if key.is_empty() {
                    None
                } else {
                    Some(key)
                }
            }
        }
    }
}

/// Map stored paths to display URLs, one output per input, order preserved.
/// Legacy URLs are normalized by extracting the key and re-resolving it under
/// the current convention. An entry that yields no key becomes an empty
/// string so the caller's gallery indexes stay aligned.
pub fn resolve_image_urls(storage: &StorageConfig, paths: &[String]) -> Vec<String> {
    paths
        .iter()
        .map(|raw| {
            StoredImagePath::parse(raw)
                .key()
                .map(|key| storage.public_object_url(key))
                .unwrap_or_default()
        })
        .collect()
}

pub async fn put_object_url(
    client: &s3::Client,
    bucket: &str,
    object: &str,
    content_type: &str,
    expires_in: u64,
) -> Result<String, s3::Error> {
    let expires_in: std::time::Duration = Duration::from_secs(expires_in);
    let expires_in: s3::presigning::PresigningConfig =
        PresigningConfig::expires_in(expires_in).unwrap();

    let presigned_request = client
        .put_object()
        .bucket(bucket)
        .key(object)
        .content_type(content_type)
        .presigned(expires_in)
        .await?;

    Ok(presigned_request.uri().into())
}

/// Delete the given objects one by one. Keys that cannot be recovered from a
/// stored path are skipped; a product row must never survive deletion just
/// because one of its legacy gallery rows is malformed.
pub async fn delete_objects(
    client: &s3::Client,
    bucket: &str,
    stored_paths: &[String],
) -> Result<usize, s3::Error> {
    let mut deleted = 0;

    for raw in stored_paths {
        let path = StoredImagePath::parse(raw);
        let Some(key) = path.key() else {
            continue;
        };

        client
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await?;

        deleted += 1;
    }

    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> StorageConfig {
        StorageConfig {
            bucket: "product-images".to_string(),
            assets_url: "https://assets.example.com".to_string(),
        }
    }

    #[test]
    fn test_bare_key_and_legacy_url_resolve_in_order() {
        let paths = vec![
            "abc.png".to_string(),
            "https://host/storage/v1/object/product-images/def.png".to_string(),
        ];

        let urls = resolve_image_urls(&storage(), &paths);

        assert_eq!(
            urls,
            vec![
                "https://assets.example.com/object/product-images/abc.png".to_string(),
                "https://assets.example.com/object/product-images/def.png".to_string(),
            ]
        );
    }

    #[test]
    fn test_legacy_url_with_public_segment() {
        let path = StoredImagePath::parse(
            "https://host/storage/v1/object/public/product-images/sub/ghi.webp",
        );
        assert_eq!(path.key(), Some("sub/ghi.webp"));
    }

    #[test]
    fn test_empty_input_resolves_to_empty_output() {
        let urls = resolve_image_urls(&storage(), &[]);
        assert!(urls.is_empty());
    }

    #[test]
    fn test_unresolvable_entries_keep_their_slot() {
        let paths = vec![
            String::new(),
            "https://host/not-an-object-url.png".to_string(),
            "abc.png".to_string(),
        ];

        let urls = resolve_image_urls(&storage(), &paths);

        assert_eq!(urls.len(), 3);
        assert_eq!(urls[0], "");
        assert_eq!(urls[1], "");
        assert_eq!(
            urls[2],
            "https://assets.example.com/object/product-images/abc.png"
        );
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let paths = vec!["abc.png".to_string(), "abc.png".to_string()];
        let urls = resolve_image_urls(&storage(), &paths);
        assert_eq!(urls[0], urls[1]);
        assert_eq!(urls.len(), 2);
    }

    #[test]
    fn test_parse_tags_the_two_conventions() {
        assert_eq!(
            StoredImagePath::parse("abc.png"),
            StoredImagePath::StorageKey("abc.png".to_string())
        );
        assert!(matches!(
            StoredImagePath::parse("https://host/storage/v1/object/b/k.png"),
            StoredImagePath::LegacyUrl(_)
        ));
    }
}
