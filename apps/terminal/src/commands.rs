//! # Command Parsing
//!
//! Turns one line of shopper input into an [`Input`].
//!
//! ## Grammar
//! ```text
//! menu
//! add <product-id>
//! cake size=<size> flavor=<flavor> [frosting=<f>] [message="<text>"] [qty=<n>]
//! + <row>        - <row>        rm <row>
//! clear | show | buy | help | quit
//!
//! <row> is a 1-based row number from the cart table, or a row id.
//! Values with spaces are double-quoted: message="Feliz cumple".
//! ```
//!
//! Parsing never looks at the cart. Whether a cake form is complete is
//! decided by the session, so the shopper sees the same messages as any
//! other front end.

use dulce_core::CakeOptions;
use std::fmt;
use thiserror::Error;

/// A parse failure, shown to the shopper as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Unknown command: {0} (type `help`)")]
    UnknownCommand(String),

    #[error("`{command}` needs a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Too many arguments for `{0}`")]
    TooManyArguments(&'static str),

    #[error("Expected key=value, got `{0}`")]
    ExpectedField(String),

    #[error("Unknown cake field: {0}")]
    UnknownField(String),

    #[error("Quantity must be a whole number, got `{0}`")]
    InvalidQuantity(String),

    #[error("Unclosed quote")]
    UnclosedQuote,
}

/// A cart row as typed by the shopper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowRef {
    /// 1-based position in the rendered table.
    Position(usize),
    /// Row id, e.g. `brownie` or `cake#2`.
    Id(String),
}

impl fmt::Display for RowRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowRef::Position(n) => write!(f, "{n}"),
            RowRef::Id(id) => f.write_str(id),
        }
    }
}

/// One parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Menu,
    Add(String),
    Cake { options: CakeOptions, quantity: i64 },
    Increment(RowRef),
    Decrement(RowRef),
    Remove(RowRef),
    Clear,
    Show,
    Buy,
    Help,
    Quit,
}

/// Parses one line. Blank lines and `#` comments yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Input>, InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let tokens = tokenize(trimmed)?;
    let Some((head, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let input = match head.to_lowercase().as_str() {
        "menu" => no_args("menu", args, Input::Menu)?,
        "add" => Input::Add(single_arg("add", "product id", args)?),
        "cake" => parse_cake(args)?,
        "+" | "inc" => Input::Increment(row_ref(single_arg("+", "row", args)?)),
        "-" | "dec" => Input::Decrement(row_ref(single_arg("-", "row", args)?)),
        "rm" | "remove" => Input::Remove(row_ref(single_arg("rm", "row", args)?)),
        "clear" => no_args("clear", args, Input::Clear)?,
        "show" | "cart" => no_args("show", args, Input::Show)?,
        "buy" | "checkout" => no_args("buy", args, Input::Buy)?,
        "help" | "?" => Input::Help,
        "quit" | "exit" => Input::Quit,
        _ => return Err(InputError::UnknownCommand(head.clone())),
    };

    Ok(Some(input))
}

fn no_args(command: &'static str, args: &[String], input: Input) -> Result<Input, InputError> {
    if args.is_empty() {
        Ok(input)
    } else {
        Err(InputError::TooManyArguments(command))
    }
}

fn single_arg(
    command: &'static str,
    argument: &'static str,
    args: &[String],
) -> Result<String, InputError> {
    match args {
        [] => Err(InputError::MissingArgument { command, argument }),
        [one] => Ok(one.clone()),
        _ => Err(InputError::TooManyArguments(command)),
    }
}

fn row_ref(token: String) -> RowRef {
    match token.parse::<usize>() {
        Ok(n) => RowRef::Position(n),
        Err(_) => RowRef::Id(token),
    }
}

fn parse_cake(args: &[String]) -> Result<Input, InputError> {
    let mut options = CakeOptions::default();
    let mut quantity = 1;

    for arg in args {
        let (key, value) = arg
            .split_once('=')
            .ok_or_else(|| InputError::ExpectedField(arg.clone()))?;

        match key.to_lowercase().as_str() {
            "size" => options.size = value.to_string(),
            "flavor" => options.flavor = value.to_string(),
            "frosting" => options.frosting = value.to_string(),
            "message" => options.message = value.to_string(),
            "qty" | "quantity" => {
                quantity = value
                    .trim()
                    .parse()
                    .map_err(|_| InputError::InvalidQuantity(value.to_string()))?;
            }
            _ => return Err(InputError::UnknownField(key.to_string())),
        }
    }

    Ok(Input::Cake { options, quantity })
}

/// Splits on whitespace, keeping double-quoted runs together.
///
/// A quote only opens at the start of a token or right after `=`, so sizes
/// such as `8"` pass through untouched. A quote closes when followed by
/// whitespace or the end of the line.
fn tokenize(line: &str) -> Result<Vec<String>, InputError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            let closes = c == '"' && chars.peek().map_or(true, |next| next.is_whitespace());
            if closes {
                in_quotes = false;
            } else {
                current.push(c);
            }
        } else if c.is_whitespace() {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else if c == '"' && (current.is_empty() || current.ends_with('=')) {
            in_quotes = true;
        } else {
            current.push(c);
        }
    }

    if in_quotes {
        return Err(InputError::UnclosedQuote);
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    Ok(tokens)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(line: &str) -> Input {
        parse(line).unwrap().unwrap()
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(parse("").unwrap(), None);
        assert_eq!(parse("   ").unwrap(), None);
        assert_eq!(parse("# just a note").unwrap(), None);
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parsed("menu"), Input::Menu);
        assert_eq!(parsed("SHOW"), Input::Show);
        assert_eq!(parsed("buy"), Input::Buy);
        assert_eq!(parsed("checkout"), Input::Buy);
        assert_eq!(parsed("clear"), Input::Clear);
        assert_eq!(parsed("quit"), Input::Quit);
        assert_eq!(parsed("?"), Input::Help);
    }

    #[test]
    fn test_add_product() {
        assert_eq!(parsed("add brownie"), Input::Add("brownie".to_string()));
        assert_eq!(
            parse("add"),
            Err(InputError::MissingArgument {
                command: "add",
                argument: "product id"
            })
        );
        assert_eq!(
            parse("add brownie cookie"),
            Err(InputError::TooManyArguments("add"))
        );
    }

    #[test]
    fn test_row_commands() {
        assert_eq!(parsed("+ 1"), Input::Increment(RowRef::Position(1)));
        assert_eq!(parsed("- 2"), Input::Decrement(RowRef::Position(2)));
        assert_eq!(
            parsed("rm cake#3"),
            Input::Remove(RowRef::Id("cake#3".to_string()))
        );
        assert_eq!(parse("clear now"), Err(InputError::TooManyArguments("clear")));
    }

    #[test]
    fn test_cake_form() {
        let input = parsed(r#"cake size=Mediano flavor="Tres Leches" message="Feliz cumple!" qty=2"#);
        assert_eq!(
            input,
            Input::Cake {
                options: CakeOptions::new("Mediano", "Tres Leches").with_message("Feliz cumple!"),
                quantity: 2,
            }
        );
    }

    #[test]
    fn test_cake_inch_size_is_not_a_quote() {
        let input = parsed(r#"cake size=8" flavor=Vainilla frosting=Chocolate"#);
        assert_eq!(
            input,
            Input::Cake {
                options: CakeOptions::new("8\"", "Vainilla").with_frosting("Chocolate"),
                quantity: 1,
            }
        );
    }

    #[test]
    fn test_cake_form_leaves_completeness_to_the_session() {
        let input = parsed("cake flavor=Chocolate");
        assert_eq!(
            input,
            Input::Cake {
                options: CakeOptions::new("", "Chocolate"),
                quantity: 1,
            }
        );
    }

    #[test]
    fn test_cake_form_errors() {
        assert_eq!(
            parse("cake size"),
            Err(InputError::ExpectedField("size".to_string()))
        );
        assert_eq!(
            parse("cake colour=red"),
            Err(InputError::UnknownField("colour".to_string()))
        );
        assert_eq!(
            parse("cake size=Grande qty=two"),
            Err(InputError::InvalidQuantity("two".to_string()))
        );
        assert_eq!(
            parse(r#"cake message="never ends"#),
            Err(InputError::UnclosedQuote)
        );
    }

    #[test]
    fn test_unknown_command() {
        let err = parse("dance").unwrap_err();
        assert_eq!(err.to_string(), "Unknown command: dance (type `help`)");
    }

    #[test]
    fn test_tokenize_empty_quoted_value() {
        assert_eq!(
            tokenize(r#"cake message="" qty=1"#).unwrap(),
            vec!["cake", "message=", "qty=1"]
        );
    }
}
