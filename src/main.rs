use clap::Parser;
use mimalloc::MiMalloc;
use page::svg::{pos, size};
use page::{
    BoxStyle, Color, Document, Font, MarkupResult, Radius, Shapes, Styling, new_tiny_svg,
};

mod cli;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const OUTLINE_CAP: usize = 200;

fn main() {
    env_logger::init();
    let args = cli::Cli::parse();

    let doc = match build(&args) {
        Ok(doc) => doc,
        Err(err) => {
            log::error!("failed to build document: {err}");
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let output = &args.output;
    if !output.css_only {
        let markup = doc.render_markup(output.indent);
        print!("{markup}");
        if !markup.ends_with('\n') {
            println!();
        }
    }
    if !output.markup_only {
        print!("{}", doc.render_css());
    }
    if output.outline {
        for line in doc.outline(OUTLINE_CAP) {
            println!("{line}");
        }
    }
}

fn build(args: &cli::Cli) -> MarkupResult<Document> {
    match &args.command {
        cli::Commands::Html5 { title } => sample_page(title, &args.output.css_url),
        cli::Commands::Svg { width, height } => Ok(sample_svg(*width, *height)),
        cli::Commands::Tag {
            name,
            content,
            attributes,
            styles,
        } => Ok(single_tag(name, content.as_deref(), attributes, styles)),
    }
}

fn sample_page(title: &str, css_url: &str) -> MarkupResult<Document> {
    let mut page = Document::new_html5(title);
    page.link_to_css(css_url)?;
    page.meta_charset("UTF-8")?;
    page.set_body_margin(3)?;
    page.set_body_color("#202020", "#A0A0A0")?;
    page.set_body_font_family("sans serif")?;

    let body = page.find_by_name_mut("body")?;
    body.add_new_child("h1").set_margin(1).add_content("Pagesmith");
    body.add_box("box0", "Speaks browser so you don't have to", &BoxStyle::default())
        .add_style("margin-top", "-2em")
        .add_style("margin-bottom", "3em");
    body.add_image("/img/sample.png", "50%")
        .add_style("margin-left", "3em");
    Ok(page)
}

fn sample_svg(width: i32, height: i32) -> Document {
    let mut doc = new_tiny_svg(pos(0, 0), size(width, height));
    if let Ok(svg) = doc.find_by_name_mut("svg") {
        svg.add_new_child("desc").add_content("Sample drawing");
        svg.rect(pos(0, 0), size(width, height), Some(&Color::rgb(240, 240, 240)));
        svg.rounded_rect(
            pos(10, 10),
            Radius { x: 5, y: 5 },
            size(width / 4, height / 4),
            Some(&Color::named("steelblue")),
        );
        svg.circle(
            pos(width / 2, height / 2),
            height / 4,
            Some(&Color::rgba(255, 0, 0, 0.5)),
        );
        svg.line(
            pos(0, height),
            pos(width, 0),
            2,
            Some(&Color::rgb(0, 0, 0)),
        );
        svg.text(
            pos(10, height - 10),
            &Font {
                family: "Verdana".to_string(),
                size: 12,
            },
            "pagesmith",
            Some(&Color::named("black")),
        );
    }
    doc
}

fn single_tag(name: &str, content: Option<&str>, attributes: &[String], styles: &[String]) -> Document {
    let mut doc = Document::new(name, name);
    let node = doc.root_mut();
    for attribute in attributes {
        match attribute.split_once('=') {
            Some((key, value)) => node.add_attribute(key, value),
            None => node.add_valueless_attribute(attribute.as_str()),
        };
    }
    for style in styles {
        match style.split_once('=') {
            Some((key, value)) => {
                node.add_style(key, value);
            }
            None => log::warn!("ignoring style without a value: {style}"),
        }
    }
    if let Some(content) = content {
        node.add_content(content);
    }
    doc
}
