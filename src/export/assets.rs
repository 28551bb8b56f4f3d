// Generated assets: robots directive, sitemap, app icons
//
// The icons are rendered from simple styled markup (an SVG gradient with a
// monogram) rather than stored as binary files.

use chrono::NaiveDate;

/// robots.txt permitting all crawlers and pointing at the sitemap
pub fn robots_txt(site_url: &str) -> String {
    let site = site_url.trim_end_matches('/');
    format!("User-agent: *\nAllow: /\n\nSitemap: {site}/sitemap.xml\n")
}

/// Single-page sitemap: just the root URL
pub fn sitemap_xml(site_url: &str, last_modified: NaiveDate) -> String {
    let site = site_url.trim_end_matches('/');
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>{site}/</loc>
    <lastmod>{lastmod}</lastmod>
  </url>
</urlset>
"#,
        lastmod = last_modified.format("%Y-%m-%d"),
    )
}

/// App icon: gradient rounded square with a monogram.
/// `size` 64 is the favicon, 180 the apple touch icon.
pub fn app_icon(size: u32) -> String {
    let radius = size / 4;
    let font_size = size * 30 / 64;
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">
  <defs>
    <linearGradient id="bg" x1="0" y1="0" x2="1" y2="1">
      <stop offset="0%" stop-color="#1d4ed8"/>
      <stop offset="55%" stop-color="#0ea5e9"/>
      <stop offset="100%" stop-color="#22c55e"/>
    </linearGradient>
  </defs>
  <rect width="{size}" height="{size}" rx="{radius}" fill="url(#bg)"/>
  <text x="50%" y="50%" dominant-baseline="central" text-anchor="middle"
        font-family="system-ui, sans-serif" font-weight="800"
        font-size="{font_size}" letter-spacing="-1" fill="#ffffff">P</text>
</svg>
"##,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn robots_allows_everything_and_names_the_sitemap() {
        let robots = robots_txt("https://example.com/");
        assert!(robots.contains("User-agent: *"));
        assert!(robots.contains("Allow: /"));
        assert!(robots.contains("Sitemap: https://example.com/sitemap.xml"));
    }

    #[test]
    fn sitemap_lists_only_the_root_url() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let sitemap = sitemap_xml("https://example.com", date);
        assert_eq!(sitemap.matches("<loc>").count(), 1);
        assert!(sitemap.contains("<loc>https://example.com/</loc>"));
        assert!(sitemap.contains("<lastmod>2026-08-07</lastmod>"));
    }

    #[test]
    fn icons_scale_with_size() {
        let small = app_icon(64);
        let large = app_icon(180);
        assert!(small.contains(r#"width="64""#));
        assert!(large.contains(r#"width="180""#));
        assert!(small.contains("linearGradient"));
    }
}
