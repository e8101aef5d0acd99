//! Copy and static records rendered by the landing page.

pub struct NavLink {
    pub title: &'static str,
    pub href: &'static str,
}

pub static NAV_LINKS: [NavLink; 5] = [
    NavLink { title: "Features", href: "#features" },
    NavLink { title: "How It Works", href: "#how-it-works" },
    NavLink { title: "Testimonials", href: "#testimonials" },
    NavLink { title: "Pricing", href: "#pricing" },
    NavLink { title: "FAQ", href: "#faq" },
];

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static FEATURES: [Feature; 6] = [
    Feature {
        icon: "fa-solid fa-heart-pulse",
        title: "Pulse Surveys",
        description: "Gather quick feedback from employees on a regular basis to track engagement trends over time.",
    },
    Feature {
        icon: "fa-solid fa-chart-line",
        title: "Analytics Dashboard",
        description: "Visualize employee sentiment with powerful charts and reports to identify areas for improvement.",
    },
    Feature {
        icon: "fa-solid fa-clock",
        title: "Automated Scheduling",
        description: "Set custom survey frequencies that work for your team: weekly, bi-weekly, or monthly.",
    },
    Feature {
        icon: "fa-solid fa-users",
        title: "Team Insights",
        description: "Compare engagement metrics across departments to identify team-specific challenges.",
    },
    Feature {
        icon: "fa-solid fa-message",
        title: "Anonymous Feedback",
        description: "Create a safe space for honest feedback with anonymous response options.",
    },
    Feature {
        icon: "fa-solid fa-award",
        title: "Recognition Tools",
        description: "Celebrate wins and acknowledge team members' contributions with built-in recognition features.",
    },
];

pub static INSIGHT_POINTS: [&str; 4] = [
    "Predictive engagement trends",
    "Automated action recommendations",
    "Departmental comparison insights",
    "Custom report generation",
];

pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub static STEPS: [Step; 4] = [
    Step {
        number: "01",
        title: "Create custom surveys",
        description: "Design tailored feedback surveys that address your specific organizational needs using our intuitive builder.",
        image: "https://images.unsplash.com/photo-1517048676732-d65bc937f952?auto=format&fit=crop&w=1170&q=80",
    },
    Step {
        number: "02",
        title: "Schedule automated delivery",
        description: "Set the frequency of surveys and let our system automatically send them to your team at the right intervals.",
        image: "https://images.unsplash.com/photo-1517245386807-bb43f82c33c4?auto=format&fit=crop&w=1170&q=80",
    },
    Step {
        number: "03",
        title: "Analyze the results",
        description: "Review comprehensive analytics that highlight trends, patterns, and areas that need attention.",
        image: "https://images.unsplash.com/photo-1543286386-713bdd548da4?auto=format&fit=crop&w=1170&q=80",
    },
    Step {
        number: "04",
        title: "Take meaningful action",
        description: "Implement targeted improvements based on data-driven insights and track the impact of your changes.",
        image: "https://images.unsplash.com/photo-1531482615713-2afd69097998?auto=format&fit=crop&w=1170&q=80",
    },
];

pub struct Stat {
    pub value: u64,
    pub unit: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub static STATS: [Stat; 4] = [
    Stat { value: 89, unit: "%", label: "Employee response rate", description: "Average response rate across all customers" },
    Stat { value: 28, unit: "%", label: "Increase in engagement", description: "Average improvement after 6 months" },
    Stat { value: 35, unit: "%", label: "Reduced turnover", description: "Average reduction in employee churn" },
    Stat { value: 94, unit: "%", label: "Customer satisfaction", description: "Companies that would recommend us" },
];

#[derive(PartialEq)]
pub struct IntegrationLogo {
    pub name: &'static str,
    pub logo: &'static str,
}

const fn logo(name: &'static str, logo: &'static str) -> IntegrationLogo {
    IntegrationLogo { name, logo }
}

pub static INTEGRATION_LOGOS: [IntegrationLogo; 12] = [
    logo("Slack", "https://images.pexels.com/photos/7989448/pexels-photo-7989448.jpeg?auto=compress&cs=tinysrgb&w=150"),
    logo("Microsoft Teams", "https://images.pexels.com/photos/5473298/pexels-photo-5473298.jpeg?auto=compress&cs=tinysrgb&w=150"),
    logo("Google Workspace", "https://images.pexels.com/photos/5473302/pexels-photo-5473302.jpeg?auto=compress&cs=tinysrgb&w=150"),
    logo("Zoom", "https://images.pexels.com/photos/5473955/pexels-photo-5473955.jpeg?auto=compress&cs=tinysrgb&w=150"),
    logo("Jira", "https://images.pexels.com/photos/5473337/pexels-photo-5473337.jpeg?auto=compress&cs=tinysrgb&w=150"),
    logo("Asana", "https://images.pexels.com/photos/5473289/pexels-photo-5473289.jpeg?auto=compress&cs=tinysrgb&w=150"),
    logo("HubSpot", "https://images.pexels.com/photos/5473950/pexels-photo-5473950.jpeg?auto=compress&cs=tinysrgb&w=150"),
    logo("Zendesk", "https://images.pexels.com/photos/5473330/pexels-photo-5473330.jpeg?auto=compress&cs=tinysrgb&w=150"),
    logo("Salesforce", "https://images.pexels.com/photos/5473297/pexels-photo-5473297.jpeg?auto=compress&cs=tinysrgb&w=150"),
    logo("Notion", "https://images.pexels.com/photos/5473957/pexels-photo-5473957.jpeg?auto=compress&cs=tinysrgb&w=150"),
    logo("Monday.com", "https://images.pexels.com/photos/5473301/pexels-photo-5473301.jpeg?auto=compress&cs=tinysrgb&w=150"),
    logo("Workday", "https://images.pexels.com/photos/5473952/pexels-photo-5473952.jpeg?auto=compress&cs=tinysrgb&w=150"),
];

pub static INTEGRATION_FEATURES: [&str; 6] = [
    "Single sign-on support",
    "API access",
    "Secure data transfer",
    "Custom webhooks",
    "Real-time syncing",
    "Advanced permissions",
];

pub struct PlanFeature {
    pub text: &'static str,
    pub included: bool,
    pub tooltip: Option<&'static str>,
}

const fn yes(text: &'static str) -> PlanFeature {
    PlanFeature { text, included: true, tooltip: None }
}

const fn no(text: &'static str) -> PlanFeature {
    PlanFeature { text, included: false, tooltip: None }
}

const fn tip(text: &'static str, tooltip: &'static str) -> PlanFeature {
    PlanFeature { text, included: true, tooltip: Some(tooltip) }
}

pub struct Plan {
    pub name: &'static str,
    pub description: &'static str,
    /// Per user per month, billed monthly.
    pub monthly: u32,
    /// Per user per month, billed annually.
    pub annually: u32,
    pub features: [PlanFeature; 12],
    pub popular: bool,
}

pub static PLANS: [Plan; 3] = [
    Plan {
        name: "Startup",
        description: "Perfect for small teams just getting started",
        monthly: 9,
        annually: 7,
        features: [
            yes("Up to 25 employees"),
            yes("Basic survey templates"),
            yes("Weekly pulse surveys"),
            yes("Email delivery"),
            yes("Basic analytics dashboard"),
            yes("Anonymous feedback"),
            no("Team comparisons"),
            no("Slack/Teams integration"),
            no("Custom survey creation"),
            no("Advanced analytics"),
            no("API access"),
            no("Dedicated success manager"),
        ],
        popular: false,
    },
    Plan {
        name: "Growth",
        description: "Best for growing mid-sized organizations",
        monthly: 19,
        annually: 15,
        features: [
            yes("Up to 100 employees"),
            yes("Advanced survey templates"),
            yes("Weekly pulse surveys"),
            yes("Email & app delivery"),
            yes("Advanced analytics dashboard"),
            yes("Anonymous feedback"),
            tip("Team comparisons", "Compare engagement across departments and teams"),
            tip("Slack/Teams integration", "Deliver surveys and collect responses directly in Slack or Teams"),
            tip("Custom survey creation", "Create fully customized surveys with your own questions"),
            no("Advanced analytics"),
            no("API access"),
            no("Dedicated success manager"),
        ],
        popular: true,
    },
    Plan {
        name: "Enterprise",
        description: "For large organizations with complex needs",
        monthly: 49,
        annually: 39,
        features: [
            yes("Unlimited employees"),
            yes("All survey templates"),
            yes("Customizable survey frequency"),
            yes("Multi-channel delivery"),
            yes("Enterprise analytics suite"),
            yes("Anonymous feedback"),
            yes("Team comparisons"),
            yes("All integrations"),
            yes("Custom survey creation"),
            tip("Advanced analytics", "AI-powered insights, trend analysis, and predictive modeling"),
            tip("API access", "Full API access for custom integrations and data exports"),
            tip("Dedicated success manager", "A dedicated customer success manager to help you implement and optimize"),
        ],
        popular: false,
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub image: &'static str,
    pub logo: &'static str,
    /// 1 to 5 stars.
    pub rating: u8,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Vibe Report has completely transformed how we understand our employee experience. The insights we've gained have helped us reduce turnover by 22% in just six months.",
        name: "Sarah Johnson",
        title: "Chief People Officer",
        company: "TechVentures Inc",
        image: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?auto=format&fit=crop&w=388&q=80",
        logo: "https://images.pexels.com/photos/5473302/pexels-photo-5473302.jpeg?auto=compress&cs=tinysrgb&w=150",
        rating: 5,
    },
    Testimonial {
        quote: "As a fast-growing startup, we needed a solution that could scale with us. Vibe Report delivers actionable insights that have helped us maintain our culture during rapid expansion.",
        name: "Michael Wei",
        title: "CEO",
        company: "Innovate Labs",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&w=687&q=80",
        logo: "https://images.pexels.com/photos/5473301/pexels-photo-5473301.jpeg?auto=compress&cs=tinysrgb&w=150",
        rating: 5,
    },
    Testimonial {
        quote: "The anonymized feedback feature has been a game-changer. Our team members now feel safe sharing honest opinions, which has led to meaningful improvements in our workplace.",
        name: "Elena Rodriguez",
        title: "HR Director",
        company: "Global Solutions",
        image: "https://images.unsplash.com/photo-1580489944761-15a19d654956?auto=format&fit=crop&w=461&q=80",
        logo: "https://images.pexels.com/photos/5473297/pexels-photo-5473297.jpeg?auto=compress&cs=tinysrgb&w=150",
        rating: 5,
    },
];

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQ_ITEMS: [FaqEntry; 8] = [
    FaqEntry {
        question: "How often are surveys sent to employees?",
        answer: "You have complete control over survey frequency. Most companies start with weekly or bi-weekly pulse surveys. You can adjust the cadence based on your team's preferences and response rates, and even set different schedules for different teams.",
    },
    FaqEntry {
        question: "Are employee responses truly anonymous?",
        answer: "Yes, our anonymous feedback feature ensures that individual responses can't be traced back to specific employees. Demographic data is only displayed in aggregate when there are enough responses to maintain anonymity. You can also choose which surveys should be anonymous vs. attributed.",
    },
    FaqEntry {
        question: "How long does it take to set up Vibe Report?",
        answer: "Most customers are fully set up within a day. Simply import your employee list (or connect to your HRIS), choose your survey templates, set your schedule, and you're ready to go. Our customer success team provides complimentary onboarding assistance for all plans.",
    },
    FaqEntry {
        question: "Can I customize the questions in the surveys?",
        answer: "Absolutely. While we provide scientifically validated question templates designed by organizational psychologists, you can fully customize the questions or create entirely new surveys from scratch to address your specific needs.",
    },
    FaqEntry {
        question: "What integrations does Vibe Report offer?",
        answer: "We integrate with all major HRIS systems, communication tools (Slack, Teams, etc.), and project management platforms. Our API allows for custom integrations with virtually any system. Check out our integrations page for a complete list.",
    },
    FaqEntry {
        question: "How do you ensure high response rates?",
        answer: "We've designed the entire experience to maximize engagement. Surveys are quick (2-3 minutes), delivered through employees' preferred channels, and include smart reminders. Our customers typically see 75-85% response rates, well above industry averages.",
    },
    FaqEntry {
        question: "Is my company data secure with Vibe Report?",
        answer: "Security is our top priority. We're SOC 2 Type II compliant, implement encryption at rest and in transit, and follow industry best practices for data protection. We also offer data residency options for companies with specific regulatory requirements.",
    },
    FaqEntry {
        question: "What happens after the free trial?",
        answer: "After your 14-day trial, you can choose the plan that works best for your organization. We'll send a reminder before your trial ends, and you can upgrade or cancel at any time. No credit card is required to start your trial.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratings_in_range() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn test_annual_price_never_above_monthly() {
        assert!(PLANS.iter().all(|p| p.annually <= p.monthly));
        assert_eq!(PLANS.iter().filter(|p| p.popular).count(), 1);
    }

    #[test]
    fn test_nav_links_are_anchors() {
        assert!(NAV_LINKS.iter().all(|l| l.href.starts_with('#')));
    }
}
