//! Built-in option catalogs.
//!
//! A modest default set covering every group, enough to drive the wizard
//! without an embedder-supplied catalog. Ids are camelCase so the label
//! fallback chain can derive readable text from them.

use crate::domain::catalog::{CatalogOption, OptionGroup, StaticCatalogs};

fn opt(id: &str, label: &str) -> CatalogOption {
    CatalogOption::new(id, label)
}

fn desc(id: &str, label: &str, description: &str) -> CatalogOption {
    CatalogOption::new(id, label).with_description(description)
}

/// The default catalog set.
pub fn builtin() -> StaticCatalogs {
    StaticCatalogs::new()
        .with_group(
            OptionGroup::SystemTypes,
            vec![
                opt("webApp", "Web Application"),
                opt("mobileApp", "Mobile Application"),
                opt("desktopApp", "Desktop Application"),
                opt("api", "API / Backend Service"),
                opt("ecommerce", "E-commerce"),
                opt("landingPage", "Landing Page"),
                opt("saas", "SaaS Platform"),
                opt("other", "Other"),
            ],
        )
        .with_group(
            OptionGroup::Objectives,
            vec![
                opt("increaseSales", "Increase Sales"),
                opt("automateProcesses", "Automate Processes"),
                opt("improveEngagement", "Improve Engagement"),
                opt("reduceCosts", "Reduce Costs"),
                opt("validateIdea", "Validate an Idea"),
                opt("other", "Other"),
            ],
        )
        .with_group(
            OptionGroup::NonFunctionalRequirements,
            vec![
                desc("performance", "Performance", "Fast response times under load"),
                desc("scalability", "Scalability", "Grows with the user base"),
                opt("usability", "Usability"),
                opt("accessibility", "Accessibility"),
                desc("availability", "Availability", "Minimal downtime"),
                opt("maintainability", "Maintainability"),
                opt("other", "Other"),
            ],
        )
        .with_group(
            OptionGroup::Features,
            vec![
                opt("authentication", "Authentication"),
                opt("userManagement", "User Management"),
                opt("notifications", "Notifications"),
                opt("payments", "Payments"),
                opt("search", "Search"),
                opt("reporting", "Reporting"),
                opt("fileUpload", "File Upload"),
                opt("chat", "Chat"),
                opt("other", "Other"),
            ],
        )
        .with_group(
            OptionGroup::ColorPalettes,
            vec![
                desc("monochromatic", "Monochromatic", "Shades of a single color"),
                desc("pastel", "Pastel", "Soft, low-saturation tones"),
                desc("vibrant", "Vibrant", "Bold, saturated colors"),
                desc("darkMode", "Dark Mode", "Dark backgrounds with high contrast"),
                desc("earthTones", "Earth Tones", "Natural browns and greens"),
                opt("custom", "Custom"),
            ],
        )
        .with_group(
            OptionGroup::VisualStyles,
            vec![
                opt("minimalist", "Minimalist"),
                opt("modern", "Modern"),
                opt("corporate", "Corporate"),
                opt("playful", "Playful"),
                opt("glassmorphism", "Glassmorphism"),
                opt("other", "Other"),
            ],
        )
        .with_group(
            OptionGroup::MenuTypes,
            vec![
                opt("topNavbar", "Top Navbar"),
                opt("sidebar", "Sidebar"),
                opt("hamburger", "Hamburger Menu"),
                opt("bottomTabs", "Bottom Tabs"),
                opt("megaMenu", "Mega Menu"),
                opt("other", "Other"),
            ],
        )
        .with_group(
            OptionGroup::LandingStructure,
            vec![
                opt("hero", "Hero Section"),
                opt("features", "Features Section"),
                opt("testimonials", "Testimonials"),
                opt("pricing", "Pricing"),
                opt("faq", "FAQ"),
                opt("footer", "Footer"),
                opt("other", "Other"),
            ],
        )
        .with_group(
            OptionGroup::LandingElements,
            vec![
                opt("ctaButtons", "Call-to-Action Buttons"),
                opt("newsletterSignup", "Newsletter Signup"),
                opt("socialProof", "Social Proof"),
                opt("demoVideo", "Demo Video"),
                opt("liveChat", "Live Chat"),
                opt("other", "Other"),
            ],
        )
        .with_group(
            OptionGroup::LandingStyles,
            vec![
                opt("singlePage", "Single Page"),
                opt("multiSection", "Multi Section"),
                opt("parallax", "Parallax"),
                opt("animated", "Animated"),
                opt("other", "Other"),
            ],
        )
        .with_group(
            OptionGroup::AuthMethods,
            vec![
                opt("emailPassword", "Email and Password"),
                opt("googleAuth", "Google Sign-In"),
                opt("githubAuth", "GitHub Sign-In"),
                opt("magicLink", "Magic Link"),
                opt("sso", "Single Sign-On"),
                opt("twoFactor", "Two-Factor Authentication"),
                opt("other", "Other"),
            ],
        )
        .with_group(
            OptionGroup::DashboardFeatures,
            vec![
                opt("analytics", "Analytics"),
                opt("userProfile", "User Profile"),
                opt("notifications", "Notifications"),
                opt("settings", "Settings"),
                opt("activityLog", "Activity Log"),
                opt("exportData", "Data Export"),
                opt("other", "Other"),
            ],
        )
        .with_group(
            OptionGroup::Frontend,
            vec![
                opt("react", "React"),
                opt("vue", "Vue"),
                opt("angular", "Angular"),
                opt("svelte", "Svelte"),
                opt("other", "Other"),
            ],
        )
        .with_group(
            OptionGroup::Backend,
            vec![
                opt("nodejs", "Node.js"),
                opt("django", "Django"),
                opt("rails", "Ruby on Rails"),
                opt("laravel", "Laravel"),
                opt("go", "Go"),
                opt("other", "Other"),
            ],
        )
        .with_group(
            OptionGroup::Fullstack,
            vec![
                opt("nextjs", "Next.js"),
                opt("nuxt", "Nuxt"),
                opt("sveltekit", "SvelteKit"),
                opt("remix", "Remix"),
                opt("other", "Other"),
            ],
        )
        .with_group(
            OptionGroup::Databases,
            vec![
                opt("postgresql", "PostgreSQL"),
                opt("mysql", "MySQL"),
                opt("mongodb", "MongoDB"),
                opt("sqlite", "SQLite"),
                opt("redis", "Redis"),
                opt("other", "Other"),
            ],
        )
        .with_group(
            OptionGroup::Orms,
            vec![
                opt("prisma", "Prisma"),
                opt("drizzle", "Drizzle"),
                opt("typeorm", "TypeORM"),
                opt("sequelize", "Sequelize"),
                opt("mongoose", "Mongoose"),
                opt("other", "Other"),
            ],
        )
        .with_group(
            OptionGroup::Hosting,
            vec![
                opt("vercel", "Vercel"),
                opt("netlify", "Netlify"),
                opt("aws", "AWS"),
                opt("railway", "Railway"),
                opt("selfHosted", "Self-Hosted"),
                opt("other", "Other"),
            ],
        )
        .with_group(
            OptionGroup::SecurityFeatures,
            vec![
                desc("inputValidation", "Input Validation", "Validate all external input"),
                desc("encryption", "Encryption", "Encrypt sensitive data at rest and in transit"),
                opt("rateLimiting", "Rate Limiting"),
                opt("auditLogs", "Audit Logs"),
                opt("csrfProtection", "CSRF Protection"),
                opt("contentSecurityPolicy", "Content Security Policy"),
                opt("other", "Other"),
            ],
        )
        .with_group(
            OptionGroup::FolderOrganization,
            vec![
                desc("byFeature", "By Feature", "One folder per feature"),
                desc("byLayer", "By Layer", "Controllers, services, models"),
                opt("byDomain", "By Domain"),
                opt("other", "Other"),
            ],
        )
        .with_group(
            OptionGroup::ArchitecturalPatterns,
            vec![
                opt("mvc", "MVC"),
                opt("cleanArchitecture", "Clean Architecture"),
                opt("hexagonal", "Hexagonal"),
                opt("microservices", "Microservices"),
                opt("monolith", "Monolith"),
                opt("serverless", "Serverless"),
                opt("other", "Other"),
            ],
        )
        .with_group(
            OptionGroup::BestPractices,
            vec![
                opt("codeReviews", "Code Reviews"),
                opt("automatedTests", "Automated Tests"),
                opt("cicd", "CI/CD"),
                opt("linting", "Linting"),
                opt("documentation", "Documentation"),
                opt("other", "Other"),
            ],
        )
        .with_group(
            OptionGroup::ScalabilityFeatures,
            vec![
                opt("loadBalancing", "Load Balancing"),
                opt("horizontalScaling", "Horizontal Scaling"),
                opt("caching", "Caching"),
                opt("queueing", "Message Queues"),
                opt("cdn", "CDN"),
                opt("other", "Other"),
            ],
        )
        .with_group(
            OptionGroup::PerformanceFeatures,
            vec![
                opt("lazyLoading", "Lazy Loading"),
                opt("codeSplitting", "Code Splitting"),
                opt("imageOptimization", "Image Optimization"),
                opt("compression", "Compression"),
                opt("prefetching", "Prefetching"),
                opt("other", "Other"),
            ],
        )
        .with_group(
            OptionGroup::Restrictions,
            vec![
                opt("jquery", "jQuery"),
                opt("inlineStyles", "Inline Styles"),
                opt("globalState", "Global Mutable State"),
                opt("deprecatedApis", "Deprecated APIs"),
                opt("heavyDependencies", "Heavy Dependencies"),
                opt("other", "Other"),
            ],
        )
        .with_group(
            OptionGroup::Integrations,
            vec![
                opt("stripe", "Stripe"),
                opt("paypal", "PayPal"),
                opt("googleMaps", "Google Maps"),
                opt("sendgrid", "SendGrid"),
                opt("twilio", "Twilio"),
                opt("slack", "Slack"),
                opt("openai", "OpenAI"),
                opt("other", "Other"),
            ],
        )
}
