// Portfolio content - the single source of truth for everything rendered
//
// One hard-coded record describing the person and their work. The TUI page,
// the skill explorer, and the static export are all read-only views over
// this data. Optional fields that are absent are simply omitted from the
// output, never an error.

use serde::Serialize;

/// Visual weight of a call-to-action link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaVariant {
    Primary,
    Secondary,
    Ghost,
}

#[derive(Debug, Clone, Serialize)]
pub struct BasicsLinks {
    pub github: &'static str,
    pub linkedin: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResumeLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Basics {
    pub name: &'static str,
    pub headline: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub links: BasicsLinks,
    pub resume: ResumeLink,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroCta {
    pub label: &'static str,
    pub href: &'static str,
    pub variant: CtaVariant,
}

#[derive(Debug, Clone, Serialize)]
pub struct Headshot {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub bullets: Vec<&'static str>,
    pub ctas: Vec<HeroCta>,
    pub quick_tags: Vec<&'static str>,
    pub headshot: Headshot,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImpactMetric {
    pub label: &'static str,
    pub value: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutHighlight {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct About {
    pub paragraphs: Vec<&'static str>,
    pub highlights: Vec<AboutHighlight>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGroup {
    pub name: &'static str,
    pub items: Vec<&'static str>,
}

/// Aspect ratio hint for project media in the export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MediaAspect {
    #[serde(rename = "16:9")]
    Wide,
    #[serde(rename = "4:3")]
    Standard,
    #[serde(rename = "1:1")]
    Square,
}

impl MediaAspect {
    /// CSS class applied to the media container in the export
    pub fn css_class(&self) -> &'static str {
        match self {
            MediaAspect::Wide => "aspect-16-9",
            MediaAspect::Standard => "aspect-4-3",
            MediaAspect::Square => "aspect-1-1",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectMedia {
    pub src: &'static str,
    pub alt: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect: Option<MediaAspect>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub impact_line: &'static str,
    pub description: &'static str,
    pub tech: Vec<&'static str>,
    pub links: ProjectLinks,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<ProjectMedia>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationEntry {
    pub school: &'static str,
    pub degree: &'static str,
    pub dates: &'static str,
    pub details: Vec<&'static str>,
    pub tags: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CertStatus {
    Completed,
    InProgress,
}

#[derive(Debug, Clone, Serialize)]
pub struct CertBadge {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<&'static str>,
    pub status: CertStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<CertBadge>,
    pub tags: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Education {
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub org: &'static str,
    pub dates: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<&'static str>,
    pub bullets: Vec<&'static str>,
    pub tech: Vec<&'static str>,
    pub tags: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    pub blurb: &'static str,
    pub social: Vec<SocialLink>,
}

/// The whole portfolio record
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioContent {
    pub basics: Basics,
    pub hero: Hero,
    pub impact_metrics: Vec<ImpactMetric>,
    pub about: About,
    pub skill_groups: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub education: Education,
    pub experience: Vec<ExperienceEntry>,
    pub contact: Contact,
}

impl PortfolioContent {
    /// Featured projects, in declaration order
    pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }

    /// Non-featured projects ("More projects" in the export)
    pub fn more_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| !p.featured)
    }
}

/// Build the content record
pub fn portfolio() -> PortfolioContent {
    PortfolioContent {
        basics: Basics {
            name: "Andrew Clausen",
            headline: "Information Security + Software Developer",
            location: "Mississauga, ON",
            email: "aclausen567@gmail.com",
            links: BasicsLinks {
                github: "https://github.com/AndrewC107",
                linkedin: "https://www.linkedin.com/in/andrew-cl",
                website: Some("https://andrewcl-portfolio.vercel.app/"),
            },
            resume: ResumeLink {
                label: "Download Resume",
                href: "/resume.pdf",
            },
        },

        hero: Hero {
            bullets: vec![
                "4th-year CS student at Queen's University, specializing in cybersecurity",
                "Hands-on experience with security labs, network analysis, and both offensive and defensive simulations",
                "Experience working with structured datasets, APIs, and visualizations",
                "Curious, self-driven, and always learning beyond the classroom",
            ],
            ctas: vec![
                HeroCta {
                    label: "View Projects",
                    href: "#projects",
                    variant: CtaVariant::Primary,
                },
                HeroCta {
                    label: "Download Resume",
                    href: "/resume.pdf",
                    variant: CtaVariant::Secondary,
                },
                HeroCta {
                    label: "Contact",
                    href: "#contact",
                    variant: CtaVariant::Ghost,
                },
            ],
            quick_tags: vec![
                "Cybersecurity",
                "Full-Stack",
                "Python",
                "TypeScript",
                "SQL",
                "Data Analytics",
            ],
            headshot: Headshot {
                src: "/headshot.jpg",
                alt: "Portrait of Andrew Clausen",
            },
        },

        impact_metrics: vec![
            ImpactMetric {
                label: "Years Programming",
                value: "7",
                hint: None,
            },
            ImpactMetric {
                label: "Projects Completed",
                value: "4",
                hint: None,
            },
            ImpactMetric {
                label: "Certifications",
                value: "4",
                hint: Some("Earned / In progress"),
            },
            ImpactMetric {
                label: "Security Labs Completed",
                value: "6",
                hint: Some("Coursework"),
            },
        ],

        about: About {
            paragraphs: vec![
                "I\u{2019}m a fourth-year Computer Science student with a specialization in cybersecurity and interests in software development and data analytics. I enjoy building technical solutions that balance security, clarity, and real-world usability.",
                "Through projects and coursework, I\u{2019}ve worked across the stack: analyzing network behavior, implementing defensive techniques, and developing tools that support decision-making. I care about building things that are easy to maintain, communicate clearly, and behave predictably in production-like environments.",
                "Outside of academics, I like to stay active and engaged in a variety of ways. I\u{2019}ve always been passionate about sports, particularly soccer, hockey, and table tennis, as they challenge me both physically and strategically. When I\u{2019}m looking to unwind, I enjoy playing video games like Rocket League and Minecraft, watching action, adventure, and comedy films, or tackling puzzles that test my logic and problem-solving skills. Whether it\u{2019}s a word challenge or a number-based game, I love the satisfaction that comes from finding solutions.",
            ],
            highlights: vec![
                AboutHighlight {
                    title: "Personal Skills",
                    description: "Strong attention to detail, clear communication, and adaptability in fast-paced environments, with experience taking on leadership responsibilities when needed.",
                },
                AboutHighlight {
                    title: "Data & analytics",
                    description: "Experience working with structured datasets, APIs, and visualizations to surface insights and support better technical decisions.",
                },
                AboutHighlight {
                    title: "Cybersecurity and Threat Analysis",
                    description: "I think about security through the lens of risk and behavior\u{2014}identifying potential threats, understanding their impact, and applying defensive principles to reduce exposure.",
                },
            ],
        },

        skill_groups: vec![
            SkillGroup {
                name: "Languages",
                items: vec![
                    "Python",
                    "JavaScript",
                    "TypeScript",
                    "HTML",
                    "CSS",
                    "SQL",
                    "Bash",
                    "C",
                    "Java",
                    "C#",
                ],
            },
            SkillGroup {
                name: "Frontend",
                items: vec![
                    "React",
                    "Next.js",
                    "Tailwind CSS",
                    "Framer Motion",
                    "Chart.js",
                ],
            },
            SkillGroup {
                name: "Backend & Services",
                items: vec!["Flask", "HIBP API"],
            },
            SkillGroup {
                name: "Cloud",
                items: vec!["AWS", "Cloud Security", "Vercel", "Zero Trust"],
            },
            SkillGroup {
                name: "AI / ML",
                items: vec!["AI", "Machine Learning"],
            },
            SkillGroup {
                name: "Security — Concepts",
                items: vec![
                    "Cybersecurity",
                    "Security Principles",
                    "Access Control",
                    "Network Security",
                    "Web Security",
                    "Endpoint Security",
                    "Security Operations",
                    "Incident Response",
                    "Disaster Recovery",
                    "Zero Trust",
                ],
            },
            SkillGroup {
                name: "Security — Risk Management",
                items: vec![
                    "Risk Management",
                    "Zero Trust",
                    "Security Operations",
                    "Incident Response",
                    "Disaster Recovery",
                ],
            },
            SkillGroup {
                name: "Security — Cryptography",
                items: vec![
                    "Cryptography",
                    "Steganography",
                    "Web Crypto API",
                    "AES-256-GCM",
                    "PBKDF2",
                ],
            },
            SkillGroup {
                name: "Data & Systems",
                items: vec![
                    "Data Analytics",
                    "Data Analysis",
                    "Data Normalization",
                    "Digitalization",
                    "Data Visualization",
                    "Databases",
                    "Software Architecture",
                    "Simulation",
                ],
            },
            SkillGroup {
                name: "Platforms & Tools",
                items: vec![
                    "GitHub",
                    "Vercel",
                    "Salesforce",
                    "Microsoft Excel",
                    "Microsoft Teams",
                    "Microsoft Word",
                ],
            },
            SkillGroup {
                name: "Professional Skills",
                items: vec![
                    "Communication",
                    "Leadership",
                    "Mentorship",
                    "Teaching",
                    "Training & Development",
                    "Planning",
                    "Organization",
                    "Team Collaboration",
                    "Time Management",
                    "Adaptability",
                    "Attention to Detail",
                    "Operations",
                ],
            },
        ],

        projects: vec![
            Project {
                title: "QKD BB84 Simulator",
                impact_line: "End-to-end BB84 simulation with live visualization of key exchange and QBER under eavesdropping.",
                description: "An interactive, end-to-end BB84 (quantum key distribution) simulation that visualizes the protocol steps and key exchange as it runs. Includes live QBER and key metrics so you can explore how eavesdropping and noise affect the final shared key.",
                tech: vec![
                    "HTML",
                    "CSS",
                    "JavaScript",
                    "Canvas API",
                    "Chart.js",
                    "Cryptography",
                    "Simulation",
                    "Data Visualization",
                    "Vercel",
                ],
                links: ProjectLinks {
                    github: None,
                    demo: Some("https://qkd-bb-84-sim.vercel.app/qkd-simulator/"),
                },
                featured: true,
                media: Some(ProjectMedia {
                    src: "/projects/bb84.png",
                    alt: "BB84 simulator interface showing protocol visualization and QBER/key metrics charts",
                    aspect: Some(MediaAspect::Wide),
                }),
            },
            Project {
                title: "Invisible Ink",
                impact_line: "Client-side encrypted steganography: AES-256-GCM notes hidden inside images using LSB embedding.",
                description: "A client-side steganography tool that encrypts notes with AES-256-GCM using a key derived via PBKDF2, then embeds the ciphertext into images via LSB encoding. Everything runs locally in the browser, using the Web Crypto API and Canvas/File APIs for secure handling and embedding/extraction.",
                tech: vec![
                    "JavaScript",
                    "HTML",
                    "CSS",
                    "Web Crypto API",
                    "AES-256-GCM",
                    "PBKDF2",
                    "Canvas API",
                    "File API",
                    "Steganography",
                ],
                links: ProjectLinks {
                    github: Some("https://github.com/AndrewC107/Invisible-Ink.git"),
                    demo: Some("https://andrewc107.github.io/Invisible-Ink/"),
                },
                featured: true,
                media: Some(ProjectMedia {
                    src: "/projects/invisible-ink.png",
                    alt: "Steganography app UI for encrypting a note and embedding it into an image",
                    aspect: Some(MediaAspect::Wide),
                }),
            },
            Project {
                title: "Password Guardian",
                impact_line: "Password security tool combining entropy scoring, zxcvbn feedback, and HaveIBeenPwned checks",
                description: "A password security web tool that scores passwords and passphrases using entropy estimates and zxcvbn guidance, with clear UX recommendations for stronger choices. Integrates HaveIBeenPwned lookups to flag breached passwords, backed by a Flask service for validation and API calls.",
                tech: vec![
                    "Python",
                    "Flask",
                    "JavaScript",
                    "HIBP API",
                    "zxcvbn",
                    "Security UX",
                ],
                links: ProjectLinks {
                    github: Some("https://github.com/AndrewC107/PasswordGuardian.git"),
                    demo: None,
                },
                featured: false,
                media: None,
            },
            Project {
                title: "Portfolio Website",
                impact_line: "Personal portfolio site showcasing projects, experience, and contact details in a clean single-page layout",
                description: "A lightweight personal portfolio site built to present my projects, background, and contact information in a simple, recruiter-friendly format. Deployed on GitHub Pages and kept intentionally minimal for fast loading and easy navigation.",
                tech: vec![
                    "Next.js",
                    "React",
                    "TypeScript",
                    "Tailwind CSS",
                    "Framer Motion",
                    "lucide-react",
                    "clsx",
                    "Next/Image",
                    "App Router",
                    "SEO",
                ],
                links: ProjectLinks {
                    github: Some("https://github.com/AndrewC107/andrew-portfolio.git"),
                    demo: Some("https://andrewc107.github.io/andrew-portfolio/"),
                },
                featured: false,
                media: None,
            },
        ],

        education: Education {
            education: vec![EducationEntry {
                school: "Queen\u{2019}s University - School of Computing",
                degree: "Bachelor of Computing (Honours) - Cybersecurity Specialization",
                dates: "2022 — 2027 (Expected)",
                details: vec![
                    "3.72 cumulative GPA - Dean\u{2019}s Honour List 2022-Present",
                    "Relevant courses: Intro to Cybersecurity, Cryptography, Computer Networks, Databases, Software Architecture.",
                    "Teaching Assistant: 200 level Discrete Math",
                    "Orientation Leader: School of Computing",
                    "Co-Founder / Executive: Queen's Table Tennis Club",
                ],
                tags: vec![
                    "Cybersecurity",
                    "Networks",
                    "SQL",
                    "Data Analytics",
                    "Software Architecture",
                    "Cryptography",
                    "Databases",
                ],
            }],
            certifications: vec![
                Certification {
                    name: "Fortinet Certified Fundamentals - Cybersecurity",
                    issuer: "Fortinet",
                    date: Some("Earned 2025"),
                    credential_url: Some(
                        "https://www.credly.com/badges/55b94532-28d3-4214-9652-68923f037c61",
                    ),
                    status: CertStatus::Completed,
                    badge: Some(CertBadge {
                        src: "/certs/fortinet-certified-fundamentals.png",
                        alt: "Fortinet Certified Fundamentals Cybersecurity badge",
                    }),
                    tags: vec![
                        "Cybersecurity",
                        "Network Security",
                        "Web Security",
                        "Endpoint Security",
                        "Cloud Security",
                        "Security Operations",
                        "Zero Trust",
                        "Risk Management",
                    ],
                },
                Certification {
                    name: "ISC² Certified in Cybersecurity (CC) – Candidate",
                    issuer: "ISC²",
                    date: Some("Expected 2026"),
                    credential_url: Some(
                        "https://www.credly.com/badges/47cabfe2-d370-4eaf-b309-7f6a53b0211a",
                    ),
                    status: CertStatus::Completed,
                    badge: Some(CertBadge {
                        src: "/certs/isc2-cc-candidate.png",
                        alt: "ISC2 Certified in Cybersecurity candidate badge",
                    }),
                    tags: vec![
                        "Cybersecurity",
                        "Security Principles",
                        "Access Control",
                        "Network Security",
                        "Cloud Security",
                        "Security Operations",
                        "Incident Response",
                        "Disaster Recovery",
                    ],
                },
                Certification {
                    name: "AWS Certified Cloud Practitioner (Foundational) – Candidate",
                    issuer: "Amazon Web Services",
                    date: Some("Expected 2026"),
                    credential_url: None,
                    status: CertStatus::InProgress,
                    badge: Some(CertBadge {
                        src: "/certs/aws-cloud-practitioner-candidate.png",
                        alt: "AWS Cloud Practitioner candidate badge",
                    }),
                    tags: vec!["AWS", "Cloud", "Cloud Security", "Cybersecurity"],
                },
                Certification {
                    name: "AWS Certified AI Practitioner (Foundational) – Candidate",
                    issuer: "Amazon Web Services",
                    date: Some("Expected 2026"),
                    credential_url: None,
                    status: CertStatus::InProgress,
                    badge: Some(CertBadge {
                        src: "/certs/aws-ai-practitioner-candidate.png",
                        alt: "AWS AI Practitioner candidate badge",
                    }),
                    tags: vec!["AWS", "AI", "Machine Learning", "Cloud", "Cybersecurity"],
                },
            ],
        },

        experience: vec![
            ExperienceEntry {
                role: "Sales Data Analyst",
                org: "Northern Dock Systems",
                dates: "May 2024 – August 2024",
                location: Some("Mississauga, ON"),
                bullets: vec![
                    "Led a data cleanup initiative on a ~25,000-entry client database by assigning unique IDs and removing duplicates, improving lookup efficiency by ~28%.",
                    "Worked directly with management as a project lead to deliver accurate, structured sales data for operational use.",
                    "Served as a primary point of contact for sales representatives, supporting client verification and lead qualification.",
                    "Balanced technical data work with stakeholder communication in a fast-paced business environment.",
                ],
                tech: vec![
                    "Salesforce",
                    "Microsoft Excel",
                    "Digitalization",
                    "Microsoft Teams",
                    "Microsoft Word",
                    "Data Normalization",
                    "Data Analysis",
                    "Attention to Detail",
                ],
                tags: vec![],
            },
            ExperienceEntry {
                role: "Soccer Head Coach / Trainer",
                org: "TOCA Pro FC",
                dates: "June 2018 – Present",
                location: Some("Mississauga, ON"),
                bullets: vec![
                    "Instruct and lead youth athletes (ages 4–14) through structured technical and physical training programs.",
                    "Coordinate schedules and communicate regularly with parents and coaching staff to support athlete development.",
                    "Develop leadership, adaptability, and clear communication skills in a dynamic, team-based environment.",
                ],
                tech: vec![
                    "Leadership",
                    "Communication",
                    "Training & Development",
                    "Planning",
                    "Organization",
                ],
                tags: vec![],
            },
            ExperienceEntry {
                role: "Assistant to the Executive Chef",
                org: "Cook Gourmet Inc.",
                dates: "April 2024 – Present",
                location: Some("Mississauga, ON"),
                bullets: vec![
                    "Supported execution of high-volume corporate events, including Fortune 500 clients, under tight time constraints.",
                    "Collaborated with kitchen and service teams to deliver consistent, high-quality outcomes in high-pressure settings.",
                    "Demonstrated strong attention to detail, reliability, and adaptability in a fast-paced operational environment.",
                ],
                tech: vec![
                    "Operations",
                    "Time Management",
                    "Team Collaboration",
                    "Communication",
                    "Adaptability",
                    "Attention to Detail",
                ],
                tags: vec![],
            },
            ExperienceEntry {
                role: "Teaching Assistant & Student Leadership",
                org: "Queen\u{2019}s University",
                dates: "2023 – Present",
                location: Some("Kingston, ON"),
                bullets: vec![
                    "Teaching Assistant for second-year Discrete Mathematics, supporting students through tutorials and problem-solving.",
                    "Orientation Leader for the School of Computing, helping onboard new students and coordinate academic programming.",
                    "Co-Founder and Executive of the Queen\u{2019}s Table Tennis Club, responsible for organization, leadership, and growth.",
                ],
                tech: vec!["Teaching", "Leadership", "Mentorship"],
                tags: vec![],
            },
        ],

        contact: Contact {
            blurb: "Want to collaborate, chat security, or discuss internships/new-grad roles? Send a message and I\u{2019}ll get back to you soon.",
            social: vec![
                SocialLink {
                    label: "Email",
                    href: "mailto:aclausen567@gmail.com",
                },
                SocialLink {
                    label: "GitHub",
                    href: "https://github.com/AndrewC107",
                },
                SocialLink {
                    label: "LinkedIn",
                    href: "https://www.linkedin.com/in/andrew-cl",
                },
                SocialLink {
                    label: "Resume",
                    href: "/resume.pdf",
                },
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_split_covers_all_projects() {
        let content = portfolio();
        let featured = content.featured_projects().count();
        let more = content.more_projects().count();
        assert_eq!(featured + more, content.projects.len());
        assert!(featured >= 1);
    }

    #[test]
    fn optional_links_are_omitted_from_json() {
        let content = portfolio();
        let json = serde_json::to_value(&content).expect("content serializes");
        // Password Guardian has no demo link; the key must be absent, not null.
        let guardian = json["projects"]
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["title"] == "Password Guardian")
            .unwrap();
        assert!(guardian["links"].get("demo").is_none());
        assert!(guardian["links"].get("github").is_some());
    }

    #[test]
    fn email_matches_mailto_social_link() {
        // The contact block and the copy affordance must agree.
        let content = portfolio();
        let mailto = content
            .contact
            .social
            .iter()
            .find(|s| s.label == "Email")
            .unwrap();
        assert_eq!(mailto.href, format!("mailto:{}", content.basics.email));
    }
}
