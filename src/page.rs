/// Static page metadata and header copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
    pub heading: &'static str,
    pub subheading: &'static str,
}

pub const PAGE: PageMeta = PageMeta {
    title: "Interactive Image Carousel - Scenic Houses Collection",
    description: "Explore a beautiful collection of houses from around the world, featuring Icelandic turf houses, \
        mountain cabins, and modern suburban homes. Accessible image carousel with keyboard navigation and screen reader support.",
    keywords: "image carousel, houses, architecture, accessible, slideshow, Icelandic houses, cabins",
    heading: "Accessible Image Carousel",
    subheading: "Built with raylib, keyboard navigation & full accessibility support",
};

impl PageMeta {
    pub fn keyword_list(&self) -> Vec<&'static str> {
        self.keywords.split(',').map(str::trim).filter(|k| !k.is_empty()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_split_on_commas() {
        let keywords = PAGE.keyword_list();
        assert_eq!(keywords.len(), 7);
        assert_eq!(keywords[0], "image carousel");
        assert_eq!(keywords[6], "cabins");
    }
}
