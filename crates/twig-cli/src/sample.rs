//! Built-in sample document
//!
//! ```text
//! body (content)
//! ├── div-1 .mainContainer
//! │   ├── span-1 .note
//! │   ├── span-2
//! │   ├── div-2 .subContainer1
//! │   │   ├── para-1 <p> .sub1-p1 .note
//! │   │   └── span-3 .sub1-span3
//! │   ├── div-3 .subContainer2
//! │   │   └── sec-1 <section>
//! │   │       └── lbl-1 <label>
//! │   └── div-4
//! │       ├── span-4 .mania
//! │       └── span-5 .note .mania
//! └── span-6 .randomSpan
//! ```

use twig_dom::{DomError, Node};

/// Root the demo queries run from
pub const DEMO_ROOT: &str = "div-1";

pub fn document() -> Result<Node, DomError> {
    let lbl1 = Node::leaf("lbl-1", "label")?;
    let sec1 = Node::builder("sec-1", "section").child(lbl1).build()?;
    let para1 = Node::builder("para-1", "p").classes(["sub1-p1", "note"]).build()?;

    let span1 = Node::builder("span-1", "span").class("note").build()?;
    let span2 = Node::leaf("span-2", "span")?;
    let span3 = Node::builder("span-3", "span").class("sub1-span3").build()?;
    let span4 = Node::builder("span-4", "span").class("mania").build()?;
    let span5 = Node::builder("span-5", "span").classes(["note", "mania"]).build()?;
    let span6 = Node::builder("span-6", "span").class("randomSpan").build()?;

    let div2 = Node::builder("div-2", "div")
        .class("subContainer1")
        .children([para1, span3])
        .build()?;
    let div3 = Node::builder("div-3", "div").class("subContainer2").child(sec1).build()?;
    let div4 = Node::builder("div-4", "div").children([span4, span5]).build()?;
    let div1 = Node::builder(DEMO_ROOT, "div")
        .class("mainContainer")
        .children([span1, span2, div2, div3, div4])
        .build()?;

    Node::builder("content", "body").children([div1, span6]).build()
}
