//! Static site content. Everything here is fixed at compile time; the
//! components only ever read these slices.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub text: &'static str,
    pub rating: u8,
    pub initial: char,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "David Cohen",
        text: "An amazing bookstore! The staff are professionals who know their books down to the smallest detail. I got excellent recommendations that matched my taste exactly, and the atmosphere is warm and welcoming.",
        rating: 5,
        initial: 'D',
    },
    Testimonial {
        id: 2,
        name: "Sarah Levi",
        text: "A special place with a rich and varied selection. The owner personally helped me track down rare books I had been hunting for years. I keep coming back for the warm, personal service.",
        rating: 5,
        initial: 'S',
    },
    Testimonial {
        id: 3,
        name: "Yosef Mizrahi",
        text: "The best service I've ever had in a bookstore! They don't just sell books, they genuinely care that you find what suits you. Fair prices and an inviting atmosphere.",
        rating: 5,
        initial: 'Y',
    },
    Testimonial {
        id: 4,
        name: "Rachel Avraham",
        text: "A wonderful experience on every visit! The staff's knowledge and professionalism are impressive. I always find interesting books here, and recommendations that open new horizons. Warmly recommended!",
        rating: 5,
        initial: 'R',
    },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "What are the store's opening hours?",
        answer: "We are open Sunday through Thursday from 9:00 to 19:00 and Friday from 9:00 to 14:00. We are closed on Saturday. Opening hours may change around holidays.",
    },
    FaqEntry {
        question: "How can I order books?",
        answer: "You can order books three ways: on our website around the clock, by phone during opening hours, or in person at the store. Orders are fast and convenient, with stock levels updated in real time.",
    },
    FaqEntry {
        question: "What is the return and exchange policy?",
        answer: "Books can be returned or exchanged within 14 days of purchase, provided the book is in new, undamaged condition. Please keep the original receipt. Returns are handled in store or by courier at the customer's expense.",
    },
    FaqEntry {
        question: "What special services do you offer?",
        answer: "We offer personal book-selection consulting, special orders of rare titles, gift wrapping, personal dedications, and author meetups and book-launch events hosted in the store.",
    },
    FaqEntry {
        question: "What are the benefits of the loyalty club?",
        answer: "Club members enjoy a 10% discount on all books, early access to new releases, invitations to exclusive events, a monthly newsletter with personal recommendations, and points redeemable for further discounts.",
    },
    FaqEntry {
        question: "How do I sign up for events and meetups?",
        answer: "Registration is done through our website, by phone, or in the store. Our events include author meetups, reading clubs, and writing workshops. Seats are limited, so early registration is recommended.",
    },
    FaqEntry {
        question: "What delivery options are available?",
        answer: "We offer home delivery nationwide within 3-5 business days, express delivery within 24 hours in the central region, and free in-store pickup. Delivery is free on orders over 150 ILS.",
    },
    FaqEntry {
        question: "Which payment methods do you accept?",
        answer: "We accept all major credit cards, bank transfer, PayPal, cash in store, and standing orders for subscribers. All payments are secured and encrypted.",
    },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PortfolioCategory {
    Events,
    Collections,
    ReadingCorners,
}

impl PortfolioCategory {
    pub fn label(&self) -> &'static str {
        match self {
            PortfolioCategory::Events => "Events",
            PortfolioCategory::Collections => "Special collections",
            PortfolioCategory::ReadingCorners => "Reading corners",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PortfolioItem {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: PortfolioCategory,
    pub image_url: &'static str,
}

pub const PORTFOLIO_ITEMS: &[PortfolioItem] = &[
    PortfolioItem {
        id: 1,
        title: "Book launch evening",
        description: "A moving evening with the author and their readers",
        category: PortfolioCategory::Events,
        image_url: "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=800&q=80",
    },
    PortfolioItem {
        id: 2,
        title: "Classic literature collection",
        description: "A curated selection of world literature",
        category: PortfolioCategory::Collections,
        image_url: "https://images.unsplash.com/photo-1524995997946-a1c2e315a42f?w=800&q=80",
    },
    PortfolioItem {
        id: 3,
        title: "A cozy reading nook",
        description: "A quiet, comfortable spot for reading",
        category: PortfolioCategory::ReadingCorners,
        image_url: "https://images.unsplash.com/photo-1521587760476-6c12a4b040da?w=800&q=80",
    },
    PortfolioItem {
        id: 4,
        title: "Reading club meetup",
        description: "Lively discussions about books",
        category: PortfolioCategory::Events,
        image_url: "https://images.unsplash.com/photo-1507842217343-583bb7270b66?w=800&q=80",
    },
    PortfolioItem {
        id: 5,
        title: "Children's book collection",
        description: "A magical world for young readers",
        category: PortfolioCategory::Collections,
        image_url: "https://images.unsplash.com/photo-1512820790803-83ca734da794?w=800&q=80",
    },
    PortfolioItem {
        id: 6,
        title: "Family reading corner",
        description: "A shared space for the whole family",
        category: PortfolioCategory::ReadingCorners,
        image_url: "https://images.unsplash.com/photo-1519682337058-a94d519337bc?w=800&q=80",
    },
    PortfolioItem {
        id: 7,
        title: "Rare books exhibition",
        description: "A special collection of first editions",
        category: PortfolioCategory::Events,
        image_url: "https://images.unsplash.com/photo-1495446815901-a7297e633e8d?w=800&q=80",
    },
    PortfolioItem {
        id: 8,
        title: "Hebrew poetry collection",
        description: "Selected works of the great poets",
        category: PortfolioCategory::Collections,
        image_url: "https://images.unsplash.com/photo-1516979187457-637abb4f9353?w=800&q=80",
    },
    PortfolioItem {
        id: 9,
        title: "An intimate reading corner",
        description: "The perfect place for deep reading",
        category: PortfolioCategory::ReadingCorners,
        image_url: "https://images.unsplash.com/photo-1506880018603-83d5b814b5a6?w=800&q=80",
    },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Service {
    pub id: u32,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: 1,
        icon: "📚",
        title: "Book consulting",
        description: "Our expert staff will help you find the perfect book for your preferences and interests",
    },
    Service {
        id: 2,
        icon: "🛒",
        title: "Special orders",
        description: "We will gladly order any title not in stock, with fast delivery and personal service",
    },
    Service {
        id: 3,
        icon: "👥",
        title: "Reading clubs",
        description: "Join our reading clubs and share your reading experiences with other enthusiastic readers",
    },
    Service {
        id: 4,
        icon: "💡",
        title: "Reading recommendations",
        description: "Get personalized recommendations based on your literary taste and the books you've read before",
    },
    Service {
        id: 5,
        icon: "🎁",
        title: "Gift wrapping",
        description: "A professional, beautifully designed gift-wrapping service that turns any book into the perfect present",
    },
    Service {
        id: 6,
        icon: "🚚",
        title: "Delivery service",
        description: "Fast and safe home delivery, with next-business-day express delivery available",
    },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ProcessStep {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        number: 1,
        title: "Book an appointment",
        description: "Schedule a convenient time through our online system or by phone",
    },
    ProcessStep {
        number: 2,
        title: "Personal consultation",
        description: "Get professional, personal advice from our team of experts",
    },
    ProcessStep {
        number: 3,
        title: "Choose your books",
        description: "Pick from a wide range of quality books matched to you",
    },
    ProcessStep {
        number: 4,
        title: "Enjoy the service",
        description: "Receive your books and the excellent service you deserve",
    },
];

/// Section links shared by the navbar and the footer quick-links column.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Services", "services"),
    ("Portfolio", "portfolio"),
    ("Testimonials", "testimonials"),
    ("FAQ", "faq"),
    ("Contact", "contact"),
];
