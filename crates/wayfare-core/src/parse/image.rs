//! Accepted image sources for package, destination and hotel images.

/// Soft ceiling for inline images, in KiB of base64 text (about 5 MB).
pub const MAX_DATA_URI_KB: usize = 5000;

/// Path prefixes served from the site's own asset folders.
pub const LOCAL_ASSET_PREFIXES: [&str; 3] = ["/images/", "/assets/", "/uploads/"];

/// File extensions accepted on external image URLs.
pub const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "gif", "webp", "avif", "svg"];

/// Image CDNs whose URLs carry no file extension.
pub const IMAGE_CDN_HOSTS: [&str; 5] = [
    "images.unsplash.com",
    "res.cloudinary.com",
    "images.pexels.com",
    "cdn.pixabay.com",
    "i.imgur.com",
];

/// Where an accepted image lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Inline `data:image/` URI and its approximate size in KiB
    DataUri { approx_kb: usize },
    /// Path under one of [`LOCAL_ASSET_PREFIXES`]
    LocalAsset,
    /// External http(s) URL
    ExternalUrl { host: String },
}

/// Classifies an image reference, rejecting anything the site cannot show.
pub fn classify_image(src: &str) -> Result<ImageSource, String> {
    let src = src.trim();

    if let Some(rest) = src.strip_prefix("data:image/") {
        let payload = rest.split_once(',').map_or("", |(_, data)| data.trim());
        if payload.is_empty() {
            return Err("Inline image has no data".to_string());
        }
        let approx_kb = payload.len() / 1024;
        if approx_kb > MAX_DATA_URI_KB {
            return Err(format!(
                "Image is too large ({approx_kb} KB); inline images must be under 5 MB"
            ));
        }
        return Ok(ImageSource::DataUri { approx_kb });
    }

    if LOCAL_ASSET_PREFIXES.iter().any(|prefix| src.starts_with(prefix)) {
        return Ok(ImageSource::LocalAsset);
    }

    let rest = src
        .strip_prefix("https://")
        .or_else(|| src.strip_prefix("http://"))
        .ok_or_else(|| {
            "Image must be a data:image URI, a local asset path or an http(s) URL".to_string()
        })?;

    let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..authority_end];
    let host = authority
        .rsplit('@')
        .next()
        .unwrap_or(authority)
        .split(':')
        .next()
        .unwrap_or_default()
        .to_lowercase();

    if host.is_empty() {
        return Err("Image URL has no host".to_string());
    }

    let after_host = &rest[authority_end..];
    let path = after_host
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .to_lowercase();

    let has_image_extension = path
        .rsplit_once('.')
        .is_some_and(|(_, ext)| IMAGE_EXTENSIONS.contains(&ext));

    if has_image_extension || IMAGE_CDN_HOSTS.contains(&host.as_str()) {
        Ok(ImageSource::ExternalUrl { host })
    } else {
        Err("Image URL must end in an image extension or use a supported image host".to_string())
    }
}
