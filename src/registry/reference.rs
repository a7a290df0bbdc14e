//! Image reference recognition and normalization for Docker Hub

/// Short docker.io form of a Hub reference
pub const IMAGE_PREFIX: &str = "docker.io/";
/// Canonical API host form of a Hub reference
pub const IMAGE_PREFIX_HUB: &str = "registry.hub.docker.com/";
/// Namespace Docker Hub uses for official single-segment images
pub const OFFICIAL_NAMESPACE: &str = "library";

const TAGS_URL_BASE: &str = "https://registry.hub.docker.com/v2/repositories/";

/// Whether `image` is hosted on Docker Hub and handled by this client
pub fn owns(image: &str) -> bool {
    image.starts_with(IMAGE_PREFIX) || image.starts_with(IMAGE_PREFIX_HUB)
}

/// Strip the Hub prefix and qualify bare names with `library/`.
///
/// `nginx` becomes `library/nginx`, `docker.io/myorg/app` becomes `myorg/app`.
pub fn repository_path(image: &str) -> String {
    let image = image.strip_prefix(IMAGE_PREFIX).unwrap_or(image);
    let image = image.strip_prefix(IMAGE_PREFIX_HUB).unwrap_or(image);

    if image.contains('/') {
        image.to_string()
    } else {
        format!("{}/{}", OFFICIAL_NAMESPACE, image)
    }
}

/// First page of the tag listing for an image reference
pub fn tags_url(image: &str) -> String {
    format!("{}{}/tags", TAGS_URL_BASE, repository_path(image))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owns_recognized_prefixes() {
        assert!(owns("docker.io/nginx"));
        assert!(owns("docker.io/myorg/myimage"));
        assert!(owns("registry.hub.docker.com/library/redis"));
    }

    #[test]
    fn test_owns_rejects_other_registries() {
        assert!(!owns("nginx"));
        assert!(!owns("quay.io/jetstack/cert-manager"));
        assert!(!owns("gcr.io/docker.io/nginx"));
        assert!(!owns("docker.io"));
        assert!(!owns(""));
    }

    #[test]
    fn test_bare_name_gets_library_namespace() {
        assert_eq!(repository_path("nginx"), "library/nginx");
        assert_eq!(repository_path("docker.io/nginx"), "library/nginx");
        assert_eq!(repository_path("registry.hub.docker.com/nginx"), "library/nginx");
    }

    #[test]
    fn test_multi_segment_path_unchanged() {
        assert_eq!(repository_path("myorg/myimage"), "myorg/myimage");
        assert_eq!(repository_path("docker.io/myorg/myimage"), "myorg/myimage");
        assert_eq!(
            repository_path("registry.hub.docker.com/library/redis"),
            "library/redis"
        );
    }

    #[test]
    fn test_tags_url() {
        assert_eq!(
            tags_url("docker.io/nginx"),
            "https://registry.hub.docker.com/v2/repositories/library/nginx/tags"
        );
        assert_eq!(
            tags_url("jetstack/version-checker"),
            "https://registry.hub.docker.com/v2/repositories/jetstack/version-checker/tags"
        );
    }
}
