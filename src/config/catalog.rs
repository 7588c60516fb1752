//! Static site content: plans, navigation, footer links and chart seed data.

use crate::domain::marks::{MarkRow, Trend};
use crate::domain::pricing::PricingPlan;

/// A single navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub path: &'static str,
}

/// A top-level navigation entry, optionally with a mega-menu of sub links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavRoute {
    pub id: u32,
    pub link: NavLink,
    pub sub_items: &'static [NavLink],
}

impl NavRoute {
    pub fn has_mega_menu(&self) -> bool {
        !self.sub_items.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SupportItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const NAV_ROUTES: &[NavRoute] = &[
    NavRoute {
        id: 1,
        link: NavLink { name: "Home", path: "/" },
        sub_items: &[],
    },
    NavRoute {
        id: 2,
        link: NavLink { name: "Product", path: "/product" },
        sub_items: &[
            NavLink { name: "Overview", path: "/product/overview" },
            NavLink { name: "Features", path: "/product/features" },
            NavLink { name: "Pricing", path: "/product/pricing" },
        ],
    },
    NavRoute {
        id: 3,
        link: NavLink { name: "Order", path: "/order" },
        sub_items: &[
            NavLink { name: "Track", path: "/order/track" },
            NavLink { name: "History", path: "/order/history" },
            NavLink { name: "Support", path: "/order/support" },
        ],
    },
    NavRoute {
        id: 4,
        link: NavLink { name: "About", path: "/about" },
        sub_items: &[],
    },
    NavRoute {
        id: 5,
        link: NavLink { name: "Login", path: "/login" },
        sub_items: &[],
    },
];

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        id: 1,
        name: "Basic",
        monthly_cents: 0,
        yearly_cents: 0,
        discount: "Always Free",
        features: &[
            "Free Users Access",
            "Simple UI Experience",
            "Basic Support",
            "Limited Features",
            "Community Forum",
            "Email Updates",
            "1GB Storage",
        ],
        popular: false,
        recommended: false,
    },
    PricingPlan {
        id: 2,
        name: "Premium",
        monthly_cents: 999,
        yearly_cents: 9_999,
        discount: "Save 17%",
        features: &[
            "Unlimited Access",
            "Advanced UI Tools",
            "Priority Support",
            "Full Feature Set",
            "Analytics Dashboard",
            "Custom Themes",
            "10GB Storage",
        ],
        popular: true,
        recommended: false,
    },
    PricingPlan {
        id: 3,
        name: "Platinum",
        monthly_cents: 1_999,
        yearly_cents: 19_999,
        discount: "Save 17%",
        features: &[
            "Enterprise Access",
            "Custom UI Builds",
            "24/7 Support",
            "All Features + API",
            "Advanced Analytics",
            "White-label",
            "Unlimited Storage",
        ],
        popular: false,
        recommended: true,
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "Facebook", url: "https://facebook.com" },
    SocialLink { name: "Twitter", url: "https://twitter.com" },
    SocialLink { name: "Instagram", url: "https://instagram.com" },
    SocialLink { name: "GitHub", url: "https://github.com" },
];

pub const SUPPORT_ITEMS: &[SupportItem] = &[
    SupportItem {
        question: "How to track order?",
        answer: "Use the Order section in navbar.",
    },
    SupportItem {
        question: "Refund policy?",
        answer: "30 days full refund.",
    },
];

/// Weekly progress the marks chart starts from.
pub const MARKS_BASE: &[MarkRow] = &[
    MarkRow { name: "Week 1", marks: 4000, quiz: 2400, amt: 2400, trend: Trend::Up },
    MarkRow { name: "Week 2", marks: 3000, quiz: 1398, amt: 2210, trend: Trend::Down },
    MarkRow { name: "Week 3", marks: 2000, quiz: 9800, amt: 2290, trend: Trend::Up },
    MarkRow { name: "Week 4", marks: 2780, quiz: 3908, amt: 2000, trend: Trend::Up },
    MarkRow { name: "Week 5", marks: 1890, quiz: 4800, amt: 2181, trend: Trend::Down },
    MarkRow { name: "Week 6", marks: 2390, quiz: 3800, amt: 2500, trend: Trend::Up },
    MarkRow { name: "Week 7", marks: 3490, quiz: 4300, amt: 2100, trend: Trend::Up },
    MarkRow { name: "Week 8", marks: 4200, quiz: 4500, amt: 2300, trend: Trend::Up },
    MarkRow { name: "Week 9", marks: 3800, quiz: 5200, amt: 2400, trend: Trend::Up },
    MarkRow { name: "Week 10", marks: 4500, quiz: 4800, amt: 2600, trend: Trend::Up },
];

/// Shown when the phone catalogue cannot be fetched: (name, price in dollars, rating).
pub const PHONE_FALLBACK: &[(&str, u32, f32)] = &[
    ("iPhone 13", 799, 4.5),
    ("iPhone 14", 999, 4.7),
    ("iPhone 15", 1_099, 4.9),
];
