/// One carousel entry. The catalog is fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideMeta {
    pub file: &'static str,
    pub caption: &'static str,
    pub description: &'static str,
    pub alt: &'static str,
}

pub static SLIDES: [SlideMeta; 5] = [
    SlideMeta {
        file: "1.jpg",
        caption: "Icelandic Turf Houses",
        description: "Traditional Icelandic turf houses nestled in lush green hills, blending harmoniously with nature",
        alt: "Dark wooden turf houses with grass-covered roofs surrounded by green meadows and hills in Iceland",
    },
    SlideMeta {
        file: "2.jpg",
        caption: "Modern Suburban Home",
        description: "Aerial view of a well-maintained suburban house with a large lawn and trees during autumn",
        alt: "Top-down aerial view of a suburban home with a circular driveway, green lawns, and fall-colored trees",
    },
    SlideMeta {
        file: "3.jpg",
        caption: "Cabin in the Mountains",
        description: "Rustic cabin with a grass roof overlooking a scenic mountain range under a partly cloudy sky",
        alt: "Wooden cabin with a grassy roof set on a hilltop with mountains and clouds in the background",
    },
    SlideMeta {
        file: "4.jpg",
        caption: "Alpine House in Mist",
        description: "Old alpine farmhouse surrounded by dark clouds and snowy mountains in a dramatic moody setting",
        alt: "Weathered mountain house on a grassy slope with mist and snowy peaks in the background",
    },
    SlideMeta {
        file: "5.jpg",
        caption: "Cozy Forest Cabin",
        description: "Log cabin tucked into a quiet forest clearing with warm lights glowing through the windows",
        alt: "Wooden log cabin surrounded by trees and autumn leaves, warmly lit from inside in a peaceful forest",
    },
];

/// Text written to the live region after a transition to `index`.
pub fn announcement(slides: &[SlideMeta], index: usize) -> String {
    let caption = slides.get(index).map_or("", |slide| slide.caption);
    format!("Slide {} of {}: {}", index + 1, slides.len(), caption)
}

/// Short position text shown in the status bar.
pub fn position_label(index: usize, total: usize) -> String {
    format!("Slide {} of {}", index + 1, total)
}
