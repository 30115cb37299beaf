//! Rule set layered on top of htmd.
//!
//! Every custom conversion is a [`ConversionRule`]: the tags it is offered,
//! a predicate over the element, and an emitter producing the Markdown
//! fragment. [`RULES`] is the registry, ordered by precedence: for a given
//! element the first rule whose predicate matches wins, and when none match
//! htmd's built-in handler runs. Each rule is tried at most once per element.
//!
//! Custom rules:
//! - `line_break` (`br`): single `\n`
//! - `horizontal_rule` (`hr`): configured rule token
//! - `task_checkbox` (`input[type=checkbox]`): `[x] ` / `[ ] `
//! - `math` (`.math-inline`, `.math-block` on inline or block elements): `$…$` / `$$…$$`
//! - `code_block` (`pre > code`): fenced block with `language-XXX` tag
//! - `inline_code` (`code`, `samp` outside `pre`): backtick span
//! - `table` (`table`): aligned pipe table
//! - `tight_list_paragraph` (`li > p` only child): unpadded paragraph
//! - `emphasis` (`em`, `i`) and `strikethrough` (`del`, `s`, `strike`)

pub mod code_handler;
pub mod inline_handlers;
pub mod list_handler;
pub mod math_handler;
pub mod node_util;
pub mod table_handler;

pub use code_handler::{fence_for, language_from_class, wrap_inline_code};
pub use inline_handlers::wrap_delimited;
pub use table_handler::{logical_table, normalize_cell_html, normalize_cell_text};

use std::sync::Arc;

use htmd::{
    Element, HtmlToMarkdown,
    element_handler::{ElementHandler, HandlerResult, Handlers},
    options::{self, Options},
};

use crate::config::{BulletMarker, CodeBlockStyle, HeadingStyle, PasteConfig};
use crate::utils::SKIPPED_TAGS;

/// Predicate deciding whether a rule applies to an element.
pub type RulePredicate = fn(&Element<'_>) -> bool;

/// Emitter producing the Markdown for a matched element.
pub type RuleEmitter = fn(&dyn Handlers, &Element<'_>, &RuleContext) -> String;

/// A node-shape to Markdown rule.
pub struct ConversionRule {
    pub name: &'static str,
    pub tags: &'static [&'static str],
    pub predicate: RulePredicate,
    pub emit: RuleEmitter,
}

impl std::fmt::Debug for ConversionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversionRule")
            .field("name", &self.name)
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}

/// Configuration the emitters read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleContext {
    pub em_delimiter: String,
    pub hr_token: String,
    pub code_block_style: CodeBlockStyle,
}

impl RuleContext {
    #[must_use]
    pub fn from_config(config: &PasteConfig) -> Self {
        Self {
            em_delimiter: config.em_delimiter().to_string(),
            hr_token: config.hr_token().to_string(),
            code_block_style: config.code_block_style(),
        }
    }
}

impl Default for RuleContext {
    fn default() -> Self {
        Self::from_config(&PasteConfig::default())
    }
}

/// Elements offered to the math rule; htmd dispatches by tag, so the class
/// check can only see elements listed here.
const MATH_TAGS: &[&str] = &[
    "span", "div", "p", "code", "samp", "pre", "em", "i", "strong", "b", "sup", "sub", "small",
    "mark", "var", "cite", "a", "section", "article", "figure", "blockquote", "math",
];

/// The rule registry, highest precedence first.
///
/// `math` precedes every other content rule since it shares tags with
/// `code_block`, `inline_code`, `tight_list_paragraph` and `emphasis`.
pub static RULES: &[ConversionRule] = &[
    ConversionRule {
        name: "line_break",
        tags: &["br"],
        predicate: inline_handlers::always,
        emit: inline_handlers::emit_line_break,
    },
    ConversionRule {
        name: "horizontal_rule",
        tags: &["hr"],
        predicate: inline_handlers::always,
        emit: inline_handlers::emit_horizontal_rule,
    },
    ConversionRule {
        name: "task_checkbox",
        tags: &["input"],
        predicate: inline_handlers::is_checkbox,
        emit: inline_handlers::emit_checkbox,
    },
    ConversionRule {
        name: "math",
        tags: MATH_TAGS,
        predicate: math_handler::is_math,
        emit: math_handler::emit_math,
    },
    ConversionRule {
        name: "code_block",
        tags: &["pre"],
        predicate: code_handler::is_code_block,
        emit: code_handler::emit_code_block,
    },
    ConversionRule {
        name: "inline_code",
        tags: &["code", "samp"],
        predicate: code_handler::is_inline_code,
        emit: code_handler::emit_inline_code,
    },
    ConversionRule {
        name: "table",
        tags: &["table"],
        predicate: table_handler::is_table,
        emit: table_handler::emit_table,
    },
    ConversionRule {
        name: "tight_list_paragraph",
        tags: &["p"],
        predicate: list_handler::is_tight_list_paragraph,
        emit: list_handler::emit_tight_list_paragraph,
    },
    ConversionRule {
        name: "emphasis",
        tags: &["em", "i"],
        predicate: inline_handlers::always,
        emit: inline_handlers::emit_emphasis,
    },
    ConversionRule {
        name: "strikethrough",
        tags: &["del", "s", "strike"],
        predicate: inline_handlers::always,
        emit: inline_handlers::emit_strikethrough,
    },
];

/// Look a rule up by name.
pub fn rule(name: &str) -> Option<&'static ConversionRule> {
    RULES.iter().find(|rule| rule.name == name)
}

/// Rules offered elements named `tag`, in the order they are tried.
pub fn rules_for_tag(tag: &str) -> Vec<&'static ConversionRule> {
    RULES
        .iter()
        .filter(|rule| rule.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)))
        .collect()
}

/// Adapter installing one [`ConversionRule`] into htmd.
struct RuleHandler {
    rule: &'static ConversionRule,
    context: Arc<RuleContext>,
}

impl ElementHandler for RuleHandler {
    fn handle(&self, handlers: &dyn Handlers, element: Element) -> Option<HandlerResult> {
        if (self.rule.predicate)(&element) {
            log::trace!("Rule '{}' matched", self.rule.name);
            let markdown = (self.rule.emit)(handlers, &element, &self.context);
            Some(HandlerResult::from(markdown))
        } else {
            // Next rule registered for this tag, then the built-in
            handlers.fallback(element)
        }
    }
}

/// Create an htmd converter with the rule set installed.
///
/// htmd tries the most recently added handler first and falls back towards
/// older ones, so rules are added in reverse registry order.
pub fn create_converter(config: &PasteConfig) -> HtmlToMarkdown {
    let options = Options {
        heading_style: match config.heading_style() {
            HeadingStyle::Atx => options::HeadingStyle::Atx,
            HeadingStyle::Setext => options::HeadingStyle::Setex,
        },
        bullet_list_marker: match config.bullet_marker() {
            BulletMarker::Asterisk => options::BulletListMarker::Asterisk,
            BulletMarker::Dash => options::BulletListMarker::Dash,
        },
        code_block_style: match config.code_block_style() {
            CodeBlockStyle::Fenced => options::CodeBlockStyle::Fenced,
            CodeBlockStyle::Indented => options::CodeBlockStyle::Indented,
        },
        ..Options::default()
    };

    let context = Arc::new(RuleContext::from_config(config));
    let mut builder = HtmlToMarkdown::builder()
        .options(options)
        .skip_tags(SKIPPED_TAGS.to_vec());

    for rule in RULES.iter().rev() {
        builder = builder.add_handler(
            rule.tags.to_vec(),
            RuleHandler {
                rule,
                context: Arc::clone(&context),
            },
        );
    }

    builder.build()
}
