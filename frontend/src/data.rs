// Static site content. Nothing here is mutated at runtime.

pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/800x600/1e293b/64748b?text=OITS+Dhaka";

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub technologies: &'static [&'static str],
    pub description: &'static str,
    pub full_description: Option<&'static str>,
    pub image_url: &'static str,
    pub demo_video_url: Option<&'static str>,
    pub captions_url: Option<&'static str>,
}

impl Project {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.technologies.iter().any(|t| *t == tag)
    }

    pub fn long_description(&self) -> &'static str {
        self.full_description.unwrap_or(self.description)
    }
}

const PROJECTS: &[Project] = &[
    Project {
        id: "fintrack",
        title: "FinTrack Banking Suite",
        category: "FinTech",
        technologies: &["React", "Node.js", "PostgreSQL", "AWS"],
        description: "A digital banking dashboard serving 200k retail customers.",
        full_description: Some("We rebuilt the retail banking front office for a regional bank: real-time balances, card controls and a reconciliation engine that cut support tickets by 40%."),
        image_url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&q=80&w=1200",
        demo_video_url: Some("https://storage.googleapis.com/gtv-videos-bucket/sample/ForBiggerJoyrides.mp4"),
        captions_url: Some("/assets/captions/fintrack.vtt"),
    },
    Project {
        id: "medibook",
        title: "MediBook Telehealth",
        category: "Healthcare",
        technologies: &["Flutter", "Firebase", "WebRTC"],
        description: "Video consultations and appointment booking for clinics.",
        full_description: None,
        image_url: "https://images.unsplash.com/photo-1576091160550-2173dba999ef?auto=format&fit=crop&q=80&w=1200",
        demo_video_url: None,
        captions_url: None,
    },
    Project {
        id: "shopwave",
        title: "ShopWave Commerce",
        category: "E-Commerce",
        technologies: &["Next.js", "React", "Stripe", "AWS"],
        description: "Headless storefront with sub-second page loads.",
        full_description: Some("A headless commerce platform with edge-rendered product pages, a custom checkout on Stripe and an inventory sync that handles 50k SKUs."),
        image_url: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?auto=format&fit=crop&q=80&w=1200",
        demo_video_url: Some("https://storage.googleapis.com/gtv-videos-bucket/sample/ForBiggerBlazes.mp4"),
        captions_url: None,
    },
    Project {
        id: "routemaster",
        title: "RouteMaster Logistics",
        category: "Logistics",
        technologies: &["Rust", "PostgreSQL", "Kubernetes"],
        description: "Fleet routing and live tracking for last-mile delivery.",
        full_description: Some("Route optimisation for 1,200 vehicles, with live GPS tracking and a dispatcher console that replans in under a second."),
        image_url: "https://images.unsplash.com/photo-1586528116311-ad8dd3c8310d?auto=format&fit=crop&q=80&w=1200",
        demo_video_url: None,
        captions_url: None,
    },
    Project {
        id: "learnly",
        title: "Learnly LMS",
        category: "EdTech",
        technologies: &["React", "Django", "PostgreSQL"],
        description: "Course delivery and assessment for 30 universities.",
        full_description: None,
        image_url: "https://images.unsplash.com/photo-1501504905252-473c47e087f8?auto=format&fit=crop&q=80&w=1200",
        demo_video_url: Some("https://storage.googleapis.com/gtv-videos-bucket/sample/ForBiggerEscapes.mp4"),
        captions_url: Some("/assets/captions/learnly.vtt"),
    },
    Project {
        id: "paysaathi",
        title: "PaySaathi Wallet",
        category: "FinTech",
        technologies: &["Flutter", "Go", "AWS"],
        description: "Mobile wallet with QR payments and bill splitting.",
        full_description: Some("A mobile wallet for the unbanked: QR merchant payments, bill splitting and a fraud scoring service written in Go."),
        image_url: "https://images.unsplash.com/photo-1563013544-824ae1b704d3?auto=format&fit=crop&q=80&w=1200",
        demo_video_url: None,
        captions_url: None,
    },
];

pub fn catalog() -> &'static [Project] {
    PROJECTS
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub aria: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", href: "/", aria: "Navigate to home page" },
    NavItem { label: "Services", href: "/services", aria: "View our software engineering services" },
    NavItem { label: "Portfolio", href: "/portfolio", aria: "Browse our past projects and case studies" },
    NavItem { label: "About", href: "/about", aria: "Learn about OITS Dhaka and our mission" },
    NavItem { label: "Contact", href: "/contact", aria: "Get in touch with our engineering team" },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service { id: "web", title: "Web Engineering", description: "Fast, accessible web platforms built on modern frameworks.", icon: "🌐" },
    Service { id: "mobile", title: "Mobile Apps", description: "Native-feeling iOS and Android apps from a single codebase.", icon: "📱" },
    Service { id: "cloud", title: "Cloud & DevOps", description: "Infrastructure as code, CI/CD and observability that scales.", icon: "☁️" },
    Service { id: "ai", title: "AI Integration", description: "Practical machine learning features wired into real products.", icon: "🧠" },
    Service { id: "design", title: "Product Design", description: "Research-driven UX and interfaces your users will enjoy.", icon: "🎨" },
    Service { id: "qa", title: "Quality Assurance", description: "Automated testing and release engineering you can trust.", icon: "✅" },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep { number: "01", title: "Discover", description: "Workshops to map goals, users and constraints." },
    ProcessStep { number: "02", title: "Design", description: "Prototypes and architecture validated early." },
    ProcessStep { number: "03", title: "Build", description: "Two-week sprints with demos you can click." },
    ProcessStep { number: "04", title: "Launch & Grow", description: "Release, monitor and iterate after go-live." },
];

pub const INQUIRY_STEPS: &[(&str, &str)] = &[
    ("1. Submission", "Fill out the form with your project details and goals."),
    ("2. Consultation", "We schedule a 30-min discovery call to understand your needs."),
    ("3. Strategy", "Our team drafts a technical proposal and roadmap."),
    ("4. Kick-off", "Legal formalization and project start."),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial { quote: "They shipped our banking app two weeks early and it just works.", author: "Farhana Rahman", role: "CTO, FinTrack" },
    Testimonial { quote: "The most transparent engineering partner we have worked with.", author: "David Chen", role: "Founder, ShopWave" },
    Testimonial { quote: "Our dispatchers finally trust the routing numbers.", author: "Imran Hossain", role: "COO, RouteMaster" },
    Testimonial { quote: "Clean code, clear communication, zero drama.", author: "Sara Lindqvist", role: "VP Product, Learnly" },
];

// (name, monogram)
pub const TRUSTED_BY: &[(&str, &str)] = &[
    ("TECHFLOW", "TF"),
    ("CLOUDSCALE", "CS"),
    ("INNOVATE", "IN"),
    ("NEXUS", "NX"),
    ("VANTAGE", "VT"),
];

pub const MARQUEE_TECH: &[&str] = &[
    "React", "Rust", "Flutter", "AWS", "Kubernetes", "PostgreSQL", "Next.js", "Go", "Django", "Firebase",
];

// (name, aria label)
pub const PUBLICATIONS: &[(&str, &str)] = &[
    ("TechCrunch", "Recognized by TechCrunch"),
    ("Wired", "Recognized by Wired Magazine"),
    ("Forbes", "Recognized by Forbes"),
    ("Business Insider", "Recognized by Business Insider"),
    ("The Verge", "Recognized by The Verge"),
];

pub const CULTURE_VALUES: &[(&str, &str)] = &[
    ("Innovation", "Always pushing the boundaries of what's possible."),
    ("Integrity", "Honest and transparent in every line of code."),
    ("Impact", "Creating solutions that matter to the real world."),
];

pub const PARTNER_BENEFITS: &[&str] = &[
    "Strategic Product Engineering",
    "Agile & Transparent Workflow",
    "Security-First Architecture",
    "Post-Launch Growth Support",
];
