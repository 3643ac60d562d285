//! Integration tests for schema assembly and TypeScript type generation.

use cms_schema::prelude::*;

fn blog() -> Schema {
    schema(shape! {
        "post" => field("post", "Post").object(shape! {
            "title" => field("title", "Title").string().required(None).unwrap(),
            "body" => field("body", "Body").rich_text().required(None).unwrap(),
            "author" => field("author", "Author")
                .relates_to(["author"])
                .unwrap()
                .required(None)
                .unwrap(),
            "categories" => field("category", "Category").array().string().unwrap(),
        }),
        "author" => field("author", "Author").object(shape! {
            "name" => field("name", "Name").string().required(None).unwrap(),
            "email" => field("email", "Email").string().required(None).unwrap(),
            "posts" => field("posts", "Posts").array().set_relations(["post"]).unwrap(),
        }),
    })
    .unwrap()
}

#[test]
fn blog_schema_type_text() {
    let expected = "\
post: {
  title: string;
  body: string;
  author: author;
  categories: any[];
};
author: {
  name: string;
  email: string;
  posts: post[];
};
";
    assert_eq!(blog().type_text(), expected);
}

#[test]
fn generate_requires_a_schema_node() {
    let generator = TypeGenerator::default();
    let text = generator.generate(&FieldNode::from(blog())).unwrap();
    assert!(text.starts_with("post: {\n  title: string;\n"));

    let node = FieldNode::from(field("post", "Post").object(Shape::new()));
    let err = generator.generate(&node).unwrap_err();
    assert_eq!(err, ConfigurationError::NotASchema { kind: "object".into() });
}

#[test]
fn generation_is_repeatable() {
    let s = blog();
    let generator = TypeGenerator::default();
    assert_eq!(generator.generate_schema(&s), generator.generate_schema(&s));
    assert_eq!(generator.generate_schema(&s), blog().type_text());
}

#[test]
fn primitive_projections() {
    let s = schema(shape! {
        "event" => field("event", "Event").object(shape! {
            "count" => field("count", "Count").number(),
            "open" => field("open", "Open").boolean(),
            "starts" => field("starts", "Starts").date(true),
            "tags" => field("tags", "Tags").array().set_relations(["category"]).unwrap(),
            "venue" => field("venue", "Venue").object(shape! {
                "city" => field("city", "City").string(),
                "geo" => field("geo", "Geo").object(shape! {
                    "lat" => field("lat", "Lat").number(),
                }),
            }),
            "owner" => field("owner", "Owner").relates_to(Vec::<String>::new()).unwrap(),
        }),
    })
    .unwrap();
    let expected = "\
event: {
  count: number;
  open: boolean;
  starts: Date;
  tags: category[];
  venue: {
    city: string;
    geo: {
      lat: number;
    };
  };
  owner: any;
};
";
    assert_eq!(s.type_text(), expected);
}

#[test]
fn interfaces_with_label_comments() {
    let s = schema(shape! {
        "author" => field("author", "Author").object(shape! {
            "name" => field("name", "Full name").string(),
        }),
    })
    .unwrap();
    let generator = TypeGenerator::new(GeneratorOptions {
        comments: true,
        ..Default::default()
    });
    let expected = "\
/**
 * Author
 */
export interface author {
  /**
   * Full name
   */
  name: string;
}
";
    assert_eq!(generator.generate_declarations(&s), expected);
}

#[test]
fn schema_rejects_non_object_entries() {
    let err = schema(shape! { "title" => field("title", "Title").string() }).unwrap_err();
    assert!(matches!(err, ConfigurationError::NotAnObjectType { .. }));
}

#[test]
fn interface_names_stay_valid_identifiers() {
    let s = schema(shape! {
        "blog-post" => field("blog-post", "Blog post").object(shape! {
            "first-name" => field("first-name", "First name").string(),
            "related" => field("related", "Related").array().set_relations(["blog-post"]).unwrap(),
        }),
    })
    .unwrap();
    let expected = "\
export interface blog_post {
  \"first-name\": string;
  related: blog_post[];
}
";
    assert_eq!(TypeGenerator::default().generate_declarations(&s), expected);
}
