use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Build sample markup documents and print them", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// HTML5 sample page with a styled body, a box and an image
    Html5 {
        /// Title of the page
        #[arg(long, default_value = "Hello")]
        title: String,
    },
    /// TinySVG sample drawing
    Svg {
        #[arg(long, default_value_t = 256)]
        width: i32,
        #[arg(long, default_value_t = 128)]
        height: i32,
    },
    /// A single element with optional content
    Tag {
        name: String,
        /// Text placed inside the element
        #[arg(long)]
        content: Option<String>,
        /// `key=value`, or a bare key for a valueless attribute
        #[arg(long = "attr")]
        attributes: Vec<String>,
        /// `property=value`
        #[arg(long = "style")]
        styles: Vec<String>,
    },
}

#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Indent the markup two spaces per level
    #[arg(long, global = true)]
    pub indent: bool,

    /// Stylesheet URL linked from HTML5 pages
    #[arg(long, global = true, default_value = "/main.css")]
    pub css_url: String,

    /// Print only the collected CSS
    #[arg(long, global = true, conflicts_with = "markup_only")]
    pub css_only: bool,

    /// Print only the markup
    #[arg(long, global = true)]
    pub markup_only: bool,

    /// Print a compact tree outline after the output
    #[arg(long, global = true)]
    pub outline: bool,
}
