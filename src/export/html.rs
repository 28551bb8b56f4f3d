// Pre-rendered page markup
//
// One self-contained HTML document: every section with its fragment anchor,
// a sticky nav, and a small inline stylesheet. Site-relative asset links
// (leading "/") get the base path prefix; fragment and absolute links pass
// through untouched.

use crate::content::{CertStatus, CtaVariant, MediaAspect, PortfolioContent, Project};
use crate::sections::SectionId;
use std::fmt::Write;

/// Minimal HTML escaping for text content and attribute values
fn esc(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Apply the deployment base path to site-relative links
fn with_base(base_path: &str, href: &str) -> String {
    if href.starts_with('/') {
        format!("{base_path}{href}")
    } else {
        href.to_string()
    }
}

/// Render the complete single-page document
pub fn render_page(content: &PortfolioContent, base_path: &str) -> String {
    let mut page = String::with_capacity(32 * 1024);
    let out = &mut page;

    let title = format!("{} — {}", content.basics.name, content.basics.headline);

    let _ = write!(
        out,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{headline}">
<link rel="icon" type="image/svg+xml" href="{icon}">
<link rel="apple-touch-icon" href="{apple}">
<style>{css}</style>
</head>
<body>
"#,
        title = esc(&title),
        headline = esc(content.basics.headline),
        icon = with_base(base_path, "/icon.svg"),
        apple = with_base(base_path, "/apple-touch-icon.svg"),
        css = STYLESHEET,
    );

    render_nav(out);
    out.push_str("<main>\n");
    render_hero(out, content, base_path);
    render_about(out, content);
    render_skills(out, content);
    render_projects(out, content, base_path);
    render_education(out, content);
    render_experience(out, content);
    render_contact(out, content, base_path);
    out.push_str("</main>\n");

    let _ = write!(
        out,
        "<footer><p>© {name}</p></footer>\n</body>\n</html>\n",
        name = esc(content.basics.name),
    );

    page
}

fn render_nav(out: &mut String) {
    out.push_str("<nav aria-label=\"Sections\"><ul>\n");
    for section in SectionId::ALL {
        let _ = writeln!(
            out,
            "  <li><a href=\"#{anchor}\">{label}</a></li>",
            anchor = section.anchor(),
            label = section.label(),
        );
    }
    out.push_str("</ul></nav>\n");
}

fn render_hero(out: &mut String, content: &PortfolioContent, base_path: &str) {
    let basics = &content.basics;
    let _ = write!(
        out,
        r#"<section id="home">
<h1>{name}</h1>
<p class="headline">{headline}</p>
<p class="muted">{location}</p>
<img class="headshot" src="{src}" alt="{alt}" width="160" height="160">
"#,
        name = esc(basics.name),
        headline = esc(basics.headline),
        location = esc(basics.location),
        src = with_base(base_path, content.hero.headshot.src),
        alt = esc(content.hero.headshot.alt),
    );

    out.push_str("<ul>\n");
    for bullet in &content.hero.bullets {
        let _ = writeln!(out, "  <li>{}</li>", esc(bullet));
    }
    out.push_str("</ul>\n<p class=\"ctas\">\n");
    for cta in &content.hero.ctas {
        let class = match cta.variant {
            CtaVariant::Primary => "cta primary",
            CtaVariant::Secondary => "cta secondary",
            CtaVariant::Ghost => "cta ghost",
        };
        let _ = writeln!(
            out,
            "  <a class=\"{class}\" href=\"{href}\">{label}</a>",
            href = with_base(base_path, cta.href),
            label = esc(cta.label),
        );
    }
    out.push_str("</p>\n");

    render_tags(out, &content.hero.quick_tags);

    out.push_str("<dl class=\"metrics\">\n");
    for metric in &content.impact_metrics {
        let _ = write!(
            out,
            "  <div><dt>{label}</dt><dd>{value}</dd>",
            label = esc(metric.label),
            value = esc(metric.value),
        );
        if let Some(hint) = metric.hint {
            let _ = write!(out, "<span class=\"muted\">{}</span>", esc(hint));
        }
        out.push_str("</div>\n");
    }
    out.push_str("</dl>\n</section>\n");
}

fn render_about(out: &mut String, content: &PortfolioContent) {
    out.push_str("<section id=\"about\">\n<h2>About</h2>\n");
    for paragraph in &content.about.paragraphs {
        let _ = writeln!(out, "<p>{}</p>", esc(paragraph));
    }
    out.push_str("<div class=\"cards\">\n");
    for highlight in &content.about.highlights {
        let _ = write!(
            out,
            "  <article class=\"card\"><h3>{title}</h3><p>{desc}</p></article>\n",
            title = esc(highlight.title),
            desc = esc(highlight.description),
        );
    }
    out.push_str("</div>\n</section>\n");
}

fn render_skills(out: &mut String, content: &PortfolioContent) {
    out.push_str("<section id=\"skills\">\n<h2>Skills</h2>\n<div class=\"cards\">\n");
    for group in &content.skill_groups {
        let _ = write!(
            out,
            "  <article class=\"card\"><h3>{name} <span class=\"muted\">{count}</span></h3>\n",
            name = esc(group.name),
            count = group.items.len(),
        );
        render_tags(out, &group.items);
        out.push_str("  </article>\n");
    }
    out.push_str("</div>\n</section>\n");
}

fn render_project(out: &mut String, project: &Project, base_path: &str, full: bool) {
    let _ = write!(
        out,
        "  <article class=\"card\"><h3>{title}</h3><p>{impact}</p>\n",
        title = esc(project.title),
        impact = esc(project.impact_line),
    );
    if full {
        // Featured cards carry the screenshot (16:9 unless stated otherwise)
        if let Some(media) = &project.media {
            let aspect = media.aspect.unwrap_or(MediaAspect::Wide);
            let _ = writeln!(
                out,
                "  <img class=\"media {class}\" src=\"{src}\" alt=\"{alt}\" loading=\"lazy\">",
                class = aspect.css_class(),
                src = with_base(base_path, media.src),
                alt = esc(media.alt),
            );
        }
        let _ = writeln!(out, "  <p class=\"muted\">{}</p>", esc(project.description));
    }
    out.push_str("  <p class=\"links\">");
    if let Some(github) = project.links.github {
        let _ = write!(
            out,
            "<a href=\"{}\" rel=\"noreferrer noopener\">GitHub</a> ",
            esc(github)
        );
    }
    if let Some(demo) = project.links.demo {
        // Vercel deployments get their platform name as the link label
        let label = if demo.contains("vercel.app") { "Vercel" } else { "Demo" };
        let _ = write!(
            out,
            "<a href=\"{}\" rel=\"noreferrer noopener\">{label}</a>",
            esc(demo)
        );
    }
    out.push_str("</p>\n");
    render_tags(out, &project.tech);
    out.push_str("  </article>\n");
}

fn render_projects(out: &mut String, content: &PortfolioContent, base_path: &str) {
    out.push_str("<section id=\"projects\">\n<h2>Projects</h2>\n<div class=\"cards\">\n");
    for project in content.featured_projects() {
        render_project(out, project, base_path, true);
    }
    out.push_str("</div>\n<h3>More projects</h3>\n<div class=\"cards\">\n");
    for project in content.more_projects() {
        render_project(out, project, base_path, false);
    }
    out.push_str("</div>\n</section>\n");
}

fn render_education(out: &mut String, content: &PortfolioContent) {
    out.push_str("<section id=\"education\">\n<h2>Education</h2>\n");
    for entry in &content.education.education {
        let _ = write!(
            out,
            "<article class=\"card\"><h3>{school}</h3><p>{degree}</p><p class=\"muted\">{dates}</p>\n",
            school = esc(entry.school),
            degree = esc(entry.degree),
            dates = esc(entry.dates),
        );
        if !entry.details.is_empty() {
            out.push_str("<ul>\n");
            for detail in &entry.details {
                let _ = writeln!(out, "  <li>{}</li>", esc(detail));
            }
            out.push_str("</ul>\n");
        }
        render_tags(out, &entry.tags);
        out.push_str("</article>\n");
    }

    out.push_str("<h3>Certifications</h3>\n<div class=\"cards\">\n");
    for cert in &content.education.certifications {
        let status = match cert.status {
            CertStatus::Completed => "completed",
            CertStatus::InProgress => "in progress",
        };
        let _ = write!(
            out,
            "  <article class=\"card\"><h3>{name}</h3><p>{issuer} <span class=\"muted\">({status})</span></p>\n",
            name = esc(cert.name),
            issuer = esc(cert.issuer),
        );
        if let Some(date) = cert.date {
            let _ = writeln!(out, "  <p class=\"muted\">{}</p>", esc(date));
        }
        if let Some(url) = cert.credential_url {
            let _ = writeln!(
                out,
                "  <p><a href=\"{}\" rel=\"noreferrer noopener\">View credential</a></p>",
                esc(url)
            );
        }
        render_tags(out, &cert.tags);
        out.push_str("  </article>\n");
    }
    out.push_str("</div>\n</section>\n");
}

fn render_experience(out: &mut String, content: &PortfolioContent) {
    out.push_str("<section id=\"experience\">\n<h2>Experience</h2>\n<ol class=\"timeline\">\n");
    for entry in &content.experience {
        let _ = write!(
            out,
            "  <li><article><h3>{role}</h3><p>{org}{location}</p><p class=\"muted\">{dates}</p>\n",
            role = esc(entry.role),
            org = esc(entry.org),
            location = entry
                .location
                .map(|l| format!(" · {}", esc(l)))
                .unwrap_or_default(),
            dates = esc(entry.dates),
        );
        out.push_str("  <ul>\n");
        for bullet in &entry.bullets {
            let _ = writeln!(out, "    <li>{}</li>", esc(bullet));
        }
        out.push_str("  </ul>\n");
        render_tags(out, &entry.tech);
        out.push_str("  </article></li>\n");
    }
    out.push_str("</ol>\n</section>\n");
}

fn render_contact(out: &mut String, content: &PortfolioContent, base_path: &str) {
    let _ = write!(
        out,
        "<section id=\"contact\">\n<h2>Contact</h2>\n<p>{blurb}</p>\n<p class=\"links\">\n",
        blurb = esc(content.contact.blurb),
    );
    for link in &content.contact.social {
        let _ = writeln!(
            out,
            "  <a href=\"{href}\">{label}</a>",
            href = with_base(base_path, link.href),
            label = esc(link.label),
        );
    }
    let _ = write!(
        out,
        "</p>\n<p class=\"muted\">{}</p>\n</section>\n",
        esc(content.basics.email),
    );
}

fn render_tags(out: &mut String, tags: &[&str]) {
    if tags.is_empty() {
        return;
    }
    out.push_str("  <p class=\"tags\">");
    for tag in tags {
        let _ = write!(out, "<span class=\"tag\">{}</span> ", esc(tag));
    }
    out.push_str("</p>\n");
}

const STYLESHEET: &str = "\
:root{color-scheme:dark light;--bg:#0b1220;--text:#e5e9f0;--muted:#8b95a7;--accent:#0ea5e9;--border:#27324a;--surface:#121a2b}\
body{margin:0;font-family:system-ui,sans-serif;background:var(--bg);color:var(--text);line-height:1.6}\
nav{position:sticky;top:0;background:var(--bg);border-bottom:1px solid var(--border)}\
nav ul{display:flex;flex-wrap:wrap;gap:1rem;list-style:none;margin:0;padding:.75rem 1.5rem}\
nav a{color:var(--muted);text-decoration:none}nav a:hover{color:var(--text)}\
main{max-width:64rem;margin:0 auto;padding:0 1.5rem}\
section{padding:3rem 0;border-bottom:1px solid var(--border)}\
h1,h2,h3{line-height:1.2}a{color:var(--accent)}\
.muted{color:var(--muted)}.headline{font-size:1.25rem}\
.headshot{border-radius:50%;object-fit:cover}\
.cards{display:grid;gap:1rem;grid-template-columns:repeat(auto-fill,minmax(16rem,1fr))}\
.card{background:var(--surface);border:1px solid var(--border);border-radius:.75rem;padding:1.25rem}\
.tags{line-height:2}.tag{border:1px solid var(--border);border-radius:9999px;padding:.1rem .6rem;margin-right:.25rem;font-size:.85rem;color:var(--muted)}\
.cta{display:inline-block;border-radius:.75rem;padding:.5rem 1rem;margin-right:.5rem;text-decoration:none}\
.cta.primary{background:var(--accent);color:#fff}.cta.secondary{border:1px solid var(--accent)}.cta.ghost{color:var(--muted)}\
.metrics{display:flex;flex-wrap:wrap;gap:2rem}.metrics dt{color:var(--muted);font-size:.85rem}.metrics dd{margin:0;font-size:1.5rem;font-weight:700}\
.timeline{list-style:none;padding-left:1rem;border-left:2px solid var(--border)}.timeline li{margin:1.5rem 0}\
.media{width:100%;border-radius:.5rem;object-fit:cover}.aspect-16-9{aspect-ratio:16/9}.aspect-4-3{aspect-ratio:4/3}.aspect-1-1{aspect-ratio:1/1}\
footer{text-align:center;color:var(--muted);padding:2rem}";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::portfolio;

    #[test]
    fn every_section_anchor_is_present() {
        let page = render_page(&portfolio(), "");
        for section in SectionId::ALL {
            assert!(
                page.contains(&format!("id=\"{}\"", section.anchor())),
                "missing anchor for {}",
                section.anchor()
            );
        }
    }

    #[test]
    fn nav_links_target_fragments() {
        let page = render_page(&portfolio(), "");
        assert!(page.contains("href=\"#projects\""));
        assert!(page.contains("href=\"#contact\""));
    }

    #[test]
    fn base_path_prefixes_site_relative_links_only() {
        let page = render_page(&portfolio(), "/PersonalPortfolio");
        assert!(page.contains("href=\"/PersonalPortfolio/resume.pdf\""));
        assert!(page.contains("src=\"/PersonalPortfolio/headshot.jpg\""));
        // Fragment and absolute links are untouched.
        assert!(page.contains("href=\"#projects\""));
        assert!(page.contains("href=\"https://github.com/AndrewC107\""));
    }

    #[test]
    fn projects_without_demo_links_render_no_demo_anchor() {
        let page = render_page(&portfolio(), "");
        // Password Guardian has GitHub only; the card must not invent a demo.
        let card_start = page.find("Password Guardian").unwrap();
        let card_end = page[card_start..].find("</article>").unwrap();
        let card = &page[card_start..card_start + card_end];
        assert!(card.contains("GitHub"));
        assert!(!card.contains(">Demo<"));
    }

    #[test]
    fn vercel_demos_are_labelled_vercel() {
        let page = render_page(&portfolio(), "");
        assert!(page.contains(">Vercel</a>"));
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(esc("C# & <stuff>"), "C# &amp; &lt;stuff&gt;");
    }
}
