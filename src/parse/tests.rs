// Parse module tests.

use super::*;
use crate::models::IconSystem;
use scraper::Html;

const PAGE_URL: &str = "https://site.com/blog/post";

// ---------------------------------------------------------------------------
// Buttons
// ---------------------------------------------------------------------------

#[test]
fn test_extract_buttons_none() {
    let html = r#"<html><body><a href="/x">Plain link</a><button>Plain</button></body></html>"#;
    let document = Html::parse_document(html);
    assert!(extract_buttons(&document).is_empty());
}

#[test]
fn test_extract_buttons_case_insensitive_substring() {
    let html = r#"<html><body>
        <button class="Btn-primary">One</button>
        <a class="submitbutton" href="/go">Two</a>
        <button class="but">Three</button>
        <div class="btn">Not a candidate tag</div>
    </body></html>"#;
    let document = Html::parse_document(html);
    let buttons = extract_buttons(&document);
    assert_eq!(buttons.len(), 2);
    assert_eq!(buttons[0].text, "One");
    assert_eq!(buttons[0].tag_name, "button");
    assert_eq!(buttons[0].classes, vec!["Btn-primary"]);
    assert_eq!(buttons[1].text, "Two");
    assert_eq!(buttons[1].tag_name, "a");
}

#[test]
fn test_extract_buttons_href_only_for_anchors() {
    let html = r#"<html><body>
        <a class="btn" href="/signup">Sign up</a>
        <button class="btn" href="/ignored">Go</button>
    </body></html>"#;
    let document = Html::parse_document(html);
    let buttons = extract_buttons(&document);
    assert_eq!(buttons.len(), 2);
    assert_eq!(buttons[0].href.as_deref(), Some("/signup"));
    assert_eq!(buttons[1].href, None);
}

#[test]
fn test_extract_buttons_style_props_and_onclick() {
    let html = r#"<html><body>
        <button class="btn" style="color: white; background:url(a.png); broken" onclick="go()">
            Buy now
        </button>
    </body></html>"#;
    let document = Html::parse_document(html);
    let buttons = extract_buttons(&document);
    assert_eq!(buttons.len(), 1);
    let button = &buttons[0];
    assert_eq!(button.text, "Buy now");
    assert_eq!(button.on_click.as_deref(), Some("go()"));
    assert_eq!(button.style_props.len(), 2);
    assert_eq!(button.style_props["color"], "white");
    assert_eq!(button.style_props["background"], "url(a.png)");
}

#[test]
fn test_extract_buttons_raw_markup_is_outer_html() {
    let html = r#"<html><body><button class="btn">Go <b>now</b></button></body></html>"#;
    let document = Html::parse_document(html);
    let buttons = extract_buttons(&document);
    assert_eq!(
        buttons[0].raw_markup,
        r#"<button class="btn">Go <b>now</b></button>"#
    );
    assert_eq!(buttons[0].text, "Go now");
    assert!(buttons[0].style_props.is_empty());
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[test]
fn test_extract_navigation_list_of_links() {
    let html = r#"<html><body>
        <nav class="main-nav">
            <ul>
                <li><a href="/">Home</a></li>
                <li><a href="/about">About</a></li>
            </ul>
        </nav>
    </body></html>"#;
    let document = Html::parse_document(html);
    let navigation = extract_navigation(&document);
    assert_eq!(navigation.len(), 1);
    let nav = &navigation[0];
    assert_eq!(nav.tag_name, "nav");
    assert_eq!(nav.classes, vec!["main-nav"]);
    assert_eq!(nav.inline_style, None);
    assert_eq!(nav.items.len(), 2);
    assert_eq!(nav.items[0].text, "Home");
    assert_eq!(nav.items[0].href.as_deref(), Some("/"));
    assert_eq!(nav.items[1].text, "About");
    assert_eq!(nav.items[1].href.as_deref(), Some("/about"));
    assert_eq!(nav.items[1].raw_markup, r#"<a href="/about">About</a>"#);
}

#[test]
fn test_extract_navigation_plain_list_items() {
    let html = r#"<html><body>
        <nav><ul><li class="current">Docs</li><li><a href="/blog">Blog</a></li></ul></nav>
    </body></html>"#;
    let document = Html::parse_document(html);
    let navigation = extract_navigation(&document);
    let items = &navigation[0].items;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].text, "Docs");
    assert_eq!(items[0].href, None);
    assert_eq!(items[0].classes, vec!["current"]);
    assert_eq!(items[1].text, "Blog");
    assert_eq!(items[1].href.as_deref(), Some("/blog"));
}

#[test]
fn test_extract_navigation_header_and_nested_nav() {
    let html = r#"<html><body>
        <header style="height: 60px">
            <a href="/">Logo</a>
            <nav><a href="/a">A</a></nav>
        </header>
        <nav><a href="/b">B</a></nav>
    </body></html>"#;
    let document = Html::parse_document(html);
    let navigation = extract_navigation(&document);
    assert_eq!(navigation.len(), 3);
    assert_eq!(navigation[0].tag_name, "header");
    assert_eq!(navigation[0].inline_style.as_deref(), Some("height: 60px"));
    assert_eq!(navigation[0].items.len(), 2);
    assert_eq!(navigation[1].tag_name, "nav");
    assert_eq!(navigation[1].items.len(), 1);
    assert_eq!(navigation[1].items[0].text, "A");
    assert_eq!(navigation[2].items[0].text, "B");
}

#[test]
fn test_extract_navigation_empty_page() {
    let document = Html::parse_document("<html><body><p>hi</p></body></html>");
    assert!(extract_navigation(&document).is_empty());
}

// ---------------------------------------------------------------------------
// Structure and layout
// ---------------------------------------------------------------------------

#[test]
fn test_extract_structure_landmarks() {
    let html = r#"<html><body>
        <header></header><nav></nav><main>
            <section></section><section></section><section></section>
        </main><footer></footer>
    </body></html>"#;
    let document = Html::parse_document(html);
    let structure = extract_structure(&document);
    assert!(structure.header);
    assert!(structure.nav);
    assert!(structure.main);
    assert!(structure.footer);
    assert!(!structure.sidebar);
    assert_eq!(structure.section_count, 3);
}

#[test]
fn test_extract_structure_empty_page() {
    let document = Html::parse_document("<html><body></body></html>");
    let structure = extract_structure(&document);
    assert_eq!(structure, crate::models::StructureFlags::default());
}

#[test]
fn test_extract_structure_sidebar_detection() {
    let with_div = Html::parse_document(r#"<html><body><div class="Left-SideBar"></div></body></html>"#);
    assert!(extract_structure(&with_div).sidebar);

    let with_aside = Html::parse_document(r#"<html><body><aside class="sidebar"></aside></body></html>"#);
    assert!(extract_structure(&with_aside).sidebar);

    // Bare aside and non-candidate tags do not count
    let bare = Html::parse_document(
        r#"<html><body><aside></aside><section class="sidebar"></section></body></html>"#,
    );
    assert!(!extract_structure(&bare).sidebar);
}

#[test]
fn test_extract_layout_candidates() {
    let html = r#"<html><body>
        <div class="Container">
            <section class="hero-section" style="padding: 0"></section>
            <article class="grid-item"></article>
            <div class="other"></div>
            <div></div>
            <span class="container"></span>
            <div class="d-flex"></div>
        </div>
    </body></html>"#;
    let document = Html::parse_document(html);
    let layout = extract_layout(&document);
    let tags: Vec<_> = layout.iter().map(|l| l.tag_name.as_str()).collect();
    assert_eq!(tags, vec!["div", "section", "article", "div"]);
    assert_eq!(layout[0].classes, vec!["Container"]);
    assert_eq!(layout[1].inline_style.as_deref(), Some("padding: 0"));
    assert_eq!(layout[3].classes, vec!["d-flex"]);
    assert!(layout[0].raw_markup.starts_with(r#"<div class="Container">"#));
}

#[test]
fn test_extract_layout_ignores_empty_class() {
    let document = Html::parse_document(r#"<html><body><div class=""></div></body></html>"#);
    assert!(extract_layout(&document).is_empty());
}

// ---------------------------------------------------------------------------
// Fonts and colors
// ---------------------------------------------------------------------------

#[test]
fn test_extract_fonts_from_style_blocks_links_and_inline() {
    let html = r#"<html><head>
        <style>
            body { font-family: Arial, sans-serif; }
            h1 {font-family:'Roboto'}
            p { font-family: Arial, sans-serif; }
        </style>
        <link rel="stylesheet" href="https://fonts.googleapis.com/css?family=Inter">
        <link rel="stylesheet" href="/static/site.css">
        <link rel="preload" href="/fonts/x.woff2">
    </head><body>
        <p style="font-family: Georgia; color: red">Hi</p>
    </body></html>"#;
    let document = Html::parse_document(html);
    let fonts = extract_fonts(&document);
    let expected: Vec<&str> = vec![
        "'Roboto'",
        "Arial, sans-serif",
        "Georgia",
        "https://fonts.googleapis.com/css?family=Inter",
    ];
    assert_eq!(fonts.iter().map(String::as_str).collect::<Vec<_>>(), expected);
}

#[test]
fn test_extract_fonts_ignores_shorthand() {
    let html = r#"<html><head><style>body { font: 12px Arial; }</style></head></html>"#;
    let document = Html::parse_document(html);
    assert!(extract_fonts(&document).is_empty());
}

#[test]
fn test_extract_colors_deduplicated_raw_values() {
    let html = r#"<html><head>
        <style>
            a { color: red; background-color: #fff }
            .x { border-color: rgb(0, 0, 0); color: #ff0000; }
        </style>
    </head><body>
        <div style="color: red; margin: 0"></div>
        <span style=""></span>
    </body></html>"#;
    let document = Html::parse_document(html);
    let colors = extract_colors(&document);
    assert_eq!(colors.len(), 4);
    assert!(colors.contains("red"));
    assert!(colors.contains("#fff"));
    assert!(colors.contains("rgb(0, 0, 0)"));
    // Equivalent spellings are not canonicalized
    assert!(colors.contains("#ff0000"));
}

#[test]
fn test_extract_colors_matches_other_color_properties() {
    let html = r#"<html><body><p style="text-decoration-color: blue"></p></body></html>"#;
    let document = Html::parse_document(html);
    let colors = extract_colors(&document);
    assert!(colors.contains("blue"));
}

#[test]
fn test_extract_colors_empty_page() {
    let document = Html::parse_document("<html><body></body></html>");
    assert!(extract_colors(&document).is_empty());
    assert!(extract_fonts(&document).is_empty());
}

// ---------------------------------------------------------------------------
// Icons
// ---------------------------------------------------------------------------

#[test]
fn test_extract_icons_font_awesome_and_other() {
    let html = r#"<html><body>
        <i class="fa fa-home"></i>
        <span class="my-Icon" style="width: 16px"></span>
        <i class="FA-Home"></i>
        <div class="icon"></div>
        <i class="italic"></i>
    </body></html>"#;
    let document = Html::parse_document(html);
    let icons = extract_icons(&document);
    assert_eq!(icons.len(), 3);
    assert_eq!(icons[0].icon_system, IconSystem::FontAwesome);
    assert_eq!(icons[0].classes, vec!["fa", "fa-home"]);
    assert!(icons[0].svg.is_none());
    assert_eq!(icons[1].icon_system, IconSystem::Other);
    assert_eq!(icons[1].inline_style.as_deref(), Some("width: 16px"));
    // Candidate selection ignores case, the icon system check does not
    assert_eq!(icons[2].icon_system, IconSystem::Other);
}

#[test]
fn test_extract_icons_svg_details() {
    let html = r#"<html><body>
        <svg class="icon icon-search" viewBox="0 0 24 24"><g><path d="M0 0h24v24H0z"/></g><path d="M1 1"/></svg>
        <svg class="icon"></svg>
        <svg viewBox="0 0 1 1"><path d="M2 2"/></svg>
    </body></html>"#;
    let document = Html::parse_document(html);
    let icons = extract_icons(&document);
    assert_eq!(icons.len(), 2);

    let first = icons[0].svg.as_ref().expect("svg details");
    assert_eq!(first.view_box.as_deref(), Some("0 0 24 24"));
    assert!(first.path_markup.starts_with("<path"));
    assert!(first.path_markup.contains("M0 0h24v24H0z"));

    let second = icons[1].svg.as_ref().expect("svg details");
    assert_eq!(second.view_box, None);
    assert_eq!(second.path_markup, "None");
}

// ---------------------------------------------------------------------------
// Images
// ---------------------------------------------------------------------------

#[test]
fn test_collect_images_resolves_sources() {
    let html = r#"<html><body>
        <img src="a.png" alt="A" class="hero wide" width="100" height="50" loading="lazy">
        <img src="/img/b.png">
        <img src="//cdn.example.com/c.png">
        <img src="https://other.com/d.png" style="border: 0">
    </body></html>"#;
    let document = Html::parse_document(html);
    let images = collect_images(&document, PAGE_URL);
    let srcs: Vec<_> = images.iter().map(|i| i.resolved_src.as_str()).collect();
    assert_eq!(
        srcs,
        vec![
            "https://site.com/blog/a.png",
            "https://site.com/img/b.png",
            "https://cdn.example.com/c.png",
            "https://other.com/d.png",
        ]
    );
    assert_eq!(images[0].alt, "A");
    assert_eq!(images[0].classes, vec!["hero", "wide"]);
    assert_eq!(images[0].width.as_deref(), Some("100"));
    assert_eq!(images[0].height.as_deref(), Some("50"));
    assert_eq!(images[0].loading_hint.as_deref(), Some("lazy"));
    assert_eq!(images[1].alt, "");
    assert_eq!(images[1].width, None);
    assert_eq!(images[3].inline_style.as_deref(), Some("border: 0"));
    assert!(images.iter().all(|i| i.inline_data.is_none()));
    assert!(images.iter().all(|i| i.needs_fetch()));
}

#[test]
fn test_collect_images_data_uri_is_inline_already() {
    let data = "data:image/gif;base64,R0lGODlhAQABAAAAACw=";
    let html = format!(r#"<html><body><img src="{data}"></body></html>"#);
    let document = Html::parse_document(&html);
    let images = collect_images(&document, PAGE_URL);
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].resolved_src, data);
    assert_eq!(images[0].inline_data.as_deref(), Some(data));
    assert!(!images[0].needs_fetch());
}

#[test]
fn test_collect_images_missing_src() {
    let document = Html::parse_document(r#"<html><body><img alt="x"></body></html>"#);
    let images = collect_images(&document, PAGE_URL);
    assert_eq!(images[0].resolved_src, "https://site.com/blog/");
    assert_eq!(images[0].alt, "x");
}

#[test]
fn test_extractors_are_idempotent() {
    let html = r#"<html><head><style>a{color:red}</style></head><body>
        <nav><a class="btn" href="/">Home</a></nav>
        <div class="container"><i class="fa-star"></i><img src="x.png"></div>
    </body></html>"#;
    let first = Html::parse_document(html);
    let second = Html::parse_document(html);
    assert_eq!(extract_buttons(&first), extract_buttons(&second));
    assert_eq!(extract_navigation(&first), extract_navigation(&second));
    assert_eq!(extract_layout(&first), extract_layout(&second));
    assert_eq!(extract_icons(&first), extract_icons(&second));
    assert_eq!(
        collect_images(&first, PAGE_URL),
        collect_images(&second, PAGE_URL)
    );
    assert_eq!(extract_colors(&first), extract_colors(&second));
}
