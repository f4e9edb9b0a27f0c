//! Static site copy. The sections render these records but the carousel
//! and counter logic only ever see their count and order.

use crate::counter::Precision;

/// Closed set of symbols the content may reference. The mapping to an
/// actual visual lives here too, next to the rest of the presentation
/// data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Coffee,
    Heart,
    Leaf,
    Users,
    Briefcase,
    MapPin,
    Phone,
    Mail,
    Facebook,
    Instagram,
    Twitter,
}

impl Glyph {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Coffee => "☕",
            Self::Heart => "🤎",
            Self::Leaf => "🌿",
            Self::Users => "👥",
            Self::Briefcase => "💼",
            Self::MapPin => "📍",
            Self::Phone => "📞",
            Self::Mail => "✉️",
            Self::Facebook => "ⓕ",
            Self::Instagram => "ⓘ",
            Self::Twitter => "ⓧ",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub const MAIN_NAVIGATION: &[NavItem] = &[
    NavItem { name: "Home", href: "#top" },
    NavItem { name: "Our Story", href: "#about" },
    NavItem { name: "Occasions", href: "#occasions" },
    NavItem { name: "Our Brew", href: "#brew-process" },
    NavItem { name: "Locations", href: "#locations" },
    NavItem { name: "Contact", href: "#contact" },
];

pub const FOOTER_NAVIGATION: &[NavItem] = &[
    NavItem { name: "Our Story", href: "#about" },
    NavItem { name: "Occasions", href: "#occasions" },
    NavItem { name: "Our Brew", href: "#brew-process" },
    NavItem { name: "Locations", href: "#locations" },
    NavItem { name: "Contact", href: "#contact" },
];

#[derive(Debug, Clone, Copy)]
pub struct HeroSlide {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub theme: &'static str,
    pub glyph: Glyph,
    pub cta_text: &'static str,
    pub cta_href: &'static str,
    pub secondary_text: &'static str,
    pub secondary_href: &'static str,
}

pub const HERO_SLIDES: &[HeroSlide] = &[
    HeroSlide {
        title: "Good Friends, Good Vibes,",
        subtitle: "Great Coffee at Tezlaa",
        description: "Tezlaa Café brings you coffee that's freshly brewed, sustainably sourced, and made to create moments of joy",
        image: "/images/hero/hero-1.png",
        theme: "theme-sunrise",
        glyph: Glyph::Coffee,
        cta_text: "See the Moments",
        cta_href: "#locations",
        secondary_text: "Discover Our Story",
        secondary_href: "#about",
    },
    HeroSlide {
        title: "Sustainably Sourced,",
        subtitle: "Passionately Crafted",
        description: "Every cup supports fair-trade farmers and sustainable practices, creating a better world one sip at a time",
        image: "/images/hero/hero-2.png",
        theme: "theme-grove",
        glyph: Glyph::Leaf,
        cta_text: "Our Impact",
        cta_href: "#about",
        secondary_text: "Visit Our Cafés",
        secondary_href: "#locations",
    },
    HeroSlide {
        title: "Where Community",
        subtitle: "Meets Coffee Culture",
        description: "Experience handcrafted beverages in spaces designed to bring people together and create lasting memories",
        image: "/images/hero/hero-3.png",
        theme: "theme-dusk",
        glyph: Glyph::Heart,
        cta_text: "Find Us",
        cta_href: "#locations",
        secondary_text: "What's Brewing",
        secondary_href: "#brew-process",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct CafeValue {
    pub glyph: Glyph,
    pub title: &'static str,
    pub description: &'static str,
}

pub const CAFE_VALUES: &[CafeValue] = &[
    CafeValue {
        glyph: Glyph::Coffee,
        title: "Quality First",
        description: "Every bean roasted to perfection",
    },
    CafeValue {
        glyph: Glyph::Heart,
        title: "Served with Love",
        description: "Crafted with care and passion",
    },
    CafeValue {
        glyph: Glyph::Leaf,
        title: "Sustainable",
        description: "Ethical sourcing & eco practices",
    },
    CafeValue {
        glyph: Glyph::Users,
        title: "Community",
        description: "Bringing people together",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Occasion {
    pub title: &'static str,
    pub description: &'static str,
    pub glyph: Glyph,
    pub theme: &'static str,
    pub features: [&'static str; 3],
}

pub const OCCASIONS: &[Occasion] = &[
    Occasion {
        title: "Celebrate Together",
        description: "Host birthdays, anniversaries, or small parties in a warm and welcoming space with fresh brews and delicious bites.",
        glyph: Glyph::Heart,
        theme: "theme-sunrise",
        features: ["Private seating", "Party packages", "Custom catering"],
    },
    Occasion {
        title: "Meetings & Work",
        description: "Get things done in our calm, comfortable environment. Perfect for team meetings, brainstorming sessions, or solo workdays.",
        glyph: Glyph::Briefcase,
        theme: "theme-dusk",
        features: ["Free WiFi", "Power outlets", "Quiet zones"],
    },
    Occasion {
        title: "Gather & Unwind",
        description: "Bring the whole crew for long weekend catch-ups, board games, or a slow afternoon over shared plates and refills.",
        glyph: Glyph::Users,
        theme: "theme-grove",
        features: ["Group tables", "Event space", "Celebration menu"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct BrewStep {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const BREW_STEPS: &[BrewStep] = &[
    BrewStep {
        icon: "/images/icons/beans.png",
        title: "Finest Beans Selected",
        description: "We source ethically grown, high-quality beans from trusted farmers who share our passion for coffee.",
    },
    BrewStep {
        icon: "/images/icons/roasted.png",
        title: "Perfectly Roasted",
        description: "Our beans are roasted in-house in small batches, locking in aroma and flavor for a truly rich experience.",
    },
    BrewStep {
        icon: "/images/icons/handcrafted.png",
        title: "Handcrafted with Love",
        description: "Each cup is carefully brewed and served fresh, balancing taste, aroma, and that perfect café warmth.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Statistic {
    pub value: f64,
    pub suffix: &'static str,
    pub label: &'static str,
    pub precision: Precision,
    pub tone: &'static str,
}

pub const STATISTICS: &[Statistic] = &[
    Statistic {
        value: 12.0,
        suffix: "+",
        label: "Outlets",
        precision: Precision::Integer,
        tone: "stat-orange",
    },
    Statistic {
        value: 10.0,
        suffix: "K",
        label: "Cups Served",
        precision: Precision::Integer,
        tone: "stat-red",
    },
    Statistic {
        value: 3.0,
        suffix: "K",
        label: "Loyal Customers",
        precision: Precision::Integer,
        tone: "stat-orange",
    },
    Statistic {
        value: 4.8,
        suffix: "",
        label: "Customer Rating",
        precision: Precision::OneDecimal,
        tone: "stat-red",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Location {
    pub name: &'static str,
    pub address: &'static str,
    pub glyph: Glyph,
    pub href: &'static str,
}

pub const LOCATIONS: &[Location] = &[
    Location {
        name: "Tezlaa Cafe Colombo 5",
        address: "45 Main Street, Colombo 05",
        glyph: Glyph::MapPin,
        href: "https://maps.google.com/?q=45+Main+Street+Colombo+05",
    },
    Location {
        name: "Tezlaa Cafe Negombo",
        address: "Beach Road, Negombo",
        glyph: Glyph::MapPin,
        href: "https://maps.google.com/?q=Beach+Road+Negombo",
    },
    Location {
        name: "Tezlaa Cafe Maharagama",
        address: "High Level Road, Maharagama",
        glyph: Glyph::MapPin,
        href: "https://maps.google.com/?q=High+Level+Road+Maharagama",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub glyph: Glyph,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "Facebook",
        href: "https://facebook.com/tezlaacafe",
        glyph: Glyph::Facebook,
    },
    SocialLink {
        name: "Twitter",
        href: "https://twitter.com/tezlaacafe",
        glyph: Glyph::Twitter,
    },
    SocialLink {
        name: "Instagram",
        href: "https://instagram.com/tezlaacafe",
        glyph: Glyph::Instagram,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ContactDetail {
    pub glyph: Glyph,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail {
        glyph: Glyph::Phone,
        label: "Phone",
        value: "+94 777 325 356",
        href: "tel:+94777325356",
    },
    ContactDetail {
        glyph: Glyph::Mail,
        label: "Email",
        value: "info@tezlaa.com",
        href: "mailto:info@tezlaa.com",
    },
    ContactDetail {
        glyph: Glyph::MapPin,
        label: "Location",
        value: "Colombo 07",
        href: "https://maps.google.com/?q=Colombo+07+Sri+Lanka",
    },
];

pub const TAGLINE: &str = "Handcrafted coffee, cozy spaces";
