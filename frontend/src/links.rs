use urlencoding::encode;

pub const SHARE_TEXT: &str = "Check out this case study from OITS Dhaka";

#[derive(Clone, Debug, PartialEq)]
pub struct ShareLinks {
    pub twitter: String,
    pub linkedin: String,
}

pub fn share_links(page_url: &str, text: &str) -> ShareLinks {
    ShareLinks {
        twitter: format!(
            "https://twitter.com/intent/tweet?url={}&text={}",
            encode(page_url),
            encode(text)
        ),
        linkedin: format!(
            "https://www.linkedin.com/sharing/share-offsite/?url={}",
            encode(page_url)
        ),
    }
}

pub fn map_link(address: &str) -> String {
    format!("https://maps.google.com/maps?q={}", encode(address))
}

pub fn map_embed_url(address: &str) -> String {
    format!("{}&output=embed", map_link(address))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_links_encode_url_and_text() {
        let links = share_links("https://oitsdhaka.com/portfolio?x=1", "Hello & welcome");
        assert_eq!(
            links.twitter,
            "https://twitter.com/intent/tweet?url=https%3A%2F%2Foitsdhaka.com%2Fportfolio%3Fx%3D1&text=Hello%20%26%20welcome"
        );
        assert_eq!(
            links.linkedin,
            "https://www.linkedin.com/sharing/share-offsite/?url=https%3A%2F%2Foitsdhaka.com%2Fportfolio%3Fx%3D1"
        );
    }

    #[test]
    fn test_map_urls() {
        assert_eq!(map_link("Banani, Dhaka"), "https://maps.google.com/maps?q=Banani%2C%20Dhaka");
        assert!(map_embed_url("Dhaka").ends_with("q=Dhaka&output=embed"));
    }
}
