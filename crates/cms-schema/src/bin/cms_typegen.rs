//! Prints the generated types of the blog content schema.
//!
//! Usage:
//!   cms-typegen                     type text, one block per content type
//!   cms-typegen --interfaces        `export interface` declarations
//!   cms-typegen --validate <type>   validate a JSON document read from stdin
//!
//! Logging is controlled with `RUST_LOG` and defaults to `warn` when it is
//! unset or unparsable.

use std::io::{self, Read};

use cms_schema::prelude::*;
use tracing_subscriber::EnvFilter;

fn blog_schema() -> Result<Schema, ConfigurationError> {
    schema(shape! {
        "post" => field("post", "Post").object(shape! {
            "title" => field("title", "Title").string().required(None)?,
            "body" => field("body", "Body").rich_text().required(None)?,
            "author" => field("author", "Author").relates_to(["author"])?.required(None)?,
            "categories" => field("category", "Category").array().string()?,
        }),
        "author" => field("author", "Author").object(shape! {
            "name" => field("name", "Name").string().required(None)?,
            "email" => field("email", "Email").string().required(None)?,
            "posts" => field("posts", "Posts").array().set_relations(["post"])?,
        }),
    })
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn main() {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_writer(io::stderr)
        .init();

    let blog = blog_schema().unwrap_or_else(|e| fail(e));
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None => print!("{}", blog.type_text()),
        Some("--interfaces") => {
            print!("{}", TypeGenerator::default().generate_declarations(&blog))
        }
        Some("--validate") => {
            let type_name = match args.get(1) {
                Some(t) => t,
                None => fail("--validate needs a content type name."),
            };
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                fail(e);
            }
            let doc: serde_json::Value =
                serde_json::from_str(buf.trim()).unwrap_or_else(|e| fail(e));
            let doc = Value::from(doc);
            match blog.validate_document(type_name, &doc, &ValidateOptions::collect()) {
                Ok(()) => println!("ok"),
                Err(Error::Validation(errors)) => {
                    for err in errors {
                        eprintln!("{err}");
                    }
                    std::process::exit(1);
                }
                Err(e) => fail(e),
            }
        }
        Some(other) => fail(format!("Unknown argument: {other}")),
    }
}
