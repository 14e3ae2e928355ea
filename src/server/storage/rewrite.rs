use crate::{model::media::MediaDto, server::storage::ObjectStorage};

/// Rewrites storage-relative keys into public URLs for a response.
///
/// Persisted rows are never touched; only the outgoing DTOs carry the
/// absolute URL. Keys that are already absolute pass through unchanged, so
/// the rewrite is idempotent. A key the store cannot turn into a URL is
/// kept raw and logged; one bad key must not fail the surrounding read.
pub fn rewrite_media(items: Vec<entity::media::Model>, storage: &dyn ObjectStorage) -> Vec<MediaDto> {
    items
        .into_iter()
        .map(|media| {
            let url = if is_absolute(&media.storage_key) {
                media.storage_key.clone()
            } else {
                match storage.public_url(&media.storage_key) {
                    Ok(url) => url,
                    Err(err) => {
                        tracing::warn!(
                            "Keeping raw storage key for media {}: {}",
                            media.id,
                            err
                        );
                        media.storage_key.clone()
                    }
                }
            };

            MediaDto {
                id: media.id,
                url,
                kind: media.kind,
            }
        })
        .collect()
}

fn is_absolute(key: &str) -> bool {
    key.starts_with("http://") || key.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::storage::{ObjectStorage, StorageError};
    use async_trait::async_trait;
    use chrono::Utc;

    struct FixedBase;

    #[async_trait]
    impl ObjectStorage for FixedBase {
        async fn put(&self, _: &str, _: Vec<u8>, _: &str) -> Result<(), StorageError> {
            Ok(())
        }

        async fn delete(&self, _: &str) -> Result<(), StorageError> {
            Ok(())
        }

        fn public_url(&self, key: &str) -> Result<String, StorageError> {
            if key.contains("bad") {
                return Err(StorageError::UrlBuild {
                    key: key.to_string(),
                });
            }
            Ok(format!("https://cdn.example.com/{key}"))
        }
    }

    fn media(id: i32, key: &str) -> entity::media::Model {
        entity::media::Model {
            id,
            storage_key: key.to_string(),
            kind: "image".to_string(),
            variant_id: None,
            review_id: None,
            user_id: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn rewrites_relative_keys() {
        let dtos = rewrite_media(vec![media(1, "products/1/front.jpg")], &FixedBase);
        assert_eq!(dtos[0].url, "https://cdn.example.com/products/1/front.jpg");
    }

    #[test]
    fn is_idempotent_on_absolute_urls() {
        let absolute = "https://cdn.example.com/products/1/front.jpg";
        let dtos = rewrite_media(vec![media(1, absolute)], &FixedBase);
        assert_eq!(dtos[0].url, absolute);

        let again = rewrite_media(vec![media(1, &dtos[0].url)], &FixedBase);
        assert_eq!(again[0].url, absolute);
    }

    #[test]
    fn is_deterministic_per_key() {
        let first = rewrite_media(vec![media(1, "a/b.png")], &FixedBase);
        let second = rewrite_media(vec![media(1, "a/b.png")], &FixedBase);
        assert_eq!(first[0].url, second[0].url);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(rewrite_media(vec![], &FixedBase).is_empty());
    }

    #[test]
    fn failed_build_keeps_raw_key_and_other_items_rewrite() {
        let dtos = rewrite_media(vec![media(1, "bad/key.png"), media(2, "ok/key.png")], &FixedBase);
        assert_eq!(dtos.len(), 2);
        assert_eq!(dtos[0].url, "bad/key.png");
        assert_eq!(dtos[1].url, "https://cdn.example.com/ok/key.png");
    }
}
