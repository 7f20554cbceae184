//! Line-based ledger file parser

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::directives::{
    Directive, MemberDirective, SpannedDirective, SummaryDirective, TransactionDirective,
};
use crate::error::{location, ParseError};
use crate::types::{Direction, Meta, SpanInfo, Trend};

static DATE_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}\b").unwrap());

// DATE DIRECTION "REMARK" AMOUNT CURRENCY [; comment]
static TXN_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(\d{4}-\d{2}-\d{2})\s+(?i:(credit|debit))\s+"([^"]*)"\s+([+-]?[\d,]*\d(?:\.\d+)?)\s+(\S+)\s*(?:;.*)?$"#,
    )
    .unwrap()
});

static META_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^([A-Za-z_][A-Za-z0-9_-]*):\s*(.*?)\s*$"#).unwrap());

static SUMMARY_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^summary\s+"([^"]*)"\s+"([^"]*)"\s+"([^"]*)"\s+(\w+)\s*(?:;.*)?$"#).unwrap()
});

static MEMBER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^member\s+"([^"]*)"\s+"([^"]*)"\s*(?:;.*)?$"#).unwrap());

static EXTRA_MEMBERS_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^extra_members\s+(\d+)\s*(?:;.*)?$").unwrap());

static STATUS_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^status\s+"([^"]*)"\s*(?:;.*)?$"#).unwrap());

/// Simple line-based parser for ledger files
pub struct SimpleLedgerParser;

impl SimpleLedgerParser {
    /// Parse ledger file content
    pub fn parse(content: &str) -> Result<Vec<SpannedDirective>, ParseError> {
        Self::parse_with_source(content, None)
    }

    /// Parse ledger file content with source file path
    pub fn parse_with_source(
        content: &str,
        source: Option<&str>,
    ) -> Result<Vec<SpannedDirective>, ParseError> {
        let mut directives = Vec::new();
        let lines: Vec<&str> = content.lines().collect();
        let mut i = 0;

        while i < lines.len() {
            let line = lines[i];
            let trimmed = line.trim();
            // Line numbers are 1-indexed
            let line_number = i + 1;

            if trimmed.is_empty() || trimmed.starts_with(';') || trimmed.starts_with('#') {
                i += 1;
                continue;
            }

            if is_continuation(line) {
                return Err(ParseError::syntax(
                    source,
                    line_number,
                    "indented line without a preceding transaction",
                ));
            }

            if DATE_PREFIX.is_match(trimmed) {
                let (directive, consumed) =
                    Self::parse_transaction_block(&lines, i, source)?;
                directives.push(directive);
                i += consumed;
                continue;
            }

            let data = Self::parse_line(trimmed, line_number, source)?;
            directives.push(SpannedDirective {
                data,
                span: SpanInfo {
                    start: line_number,
                    end: line_number,
                },
                source: source.map(|s| s.to_string()),
            });
            i += 1;
        }

        Ok(directives)
    }

    /// Parse a transaction line plus its indented metadata lines
    fn parse_transaction_block(
        lines: &[&str],
        start_idx: usize,
        source: Option<&str>,
    ) -> Result<(SpannedDirective, usize), ParseError> {
        let line_number = start_idx + 1;
        let header = lines[start_idx].trim();

        let caps = TXN_LINE.captures(header).ok_or_else(|| {
            ParseError::syntax(
                source,
                line_number,
                format!(
                    "malformed transaction '{}', expected DATE credit|debit \"REMARK\" AMOUNT CURRENCY",
                    header
                ),
            )
        })?;

        let date_str = &caps[1];
        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
            ParseError::syntax(source, line_number, format!("invalid date '{}'", date_str))
        })?;
        let direction = Direction::from_str(&caps[2])
            .map_err(|e| ParseError::syntax(source, line_number, e))?;
        let remark = caps[3].to_string();
        let amount_str = caps[4].replace(',', "");
        let amount = Decimal::from_str(&amount_str).map_err(|_| {
            ParseError::syntax(source, line_number, format!("invalid amount '{}'", &caps[4]))
        })?;
        let currency = caps[5].to_string();

        let mut meta = Meta::new();
        let mut consumed = 1;
        for (offset, line) in lines[start_idx + 1..].iter().enumerate() {
            if !is_continuation(line) {
                break;
            }
            consumed += 1;
            let trimmed = line.trim();
            if trimmed.starts_with(';') {
                continue;
            }
            let meta_caps = META_LINE.captures(trimmed).ok_or_else(|| {
                ParseError::syntax(
                    source,
                    line_number + offset + 1,
                    format!("expected 'key: value' metadata, found '{}'", trimmed),
                )
            })?;
            let value = meta_caps[2].trim_matches('"').to_string();
            meta.insert(meta_caps[1].to_string(), value);
        }

        let directive = SpannedDirective {
            data: Directive::Transaction(TransactionDirective {
                date,
                direction,
                remark,
                amount,
                currency,
                meta,
            }),
            span: SpanInfo {
                start: line_number,
                end: line_number + consumed - 1,
            },
            source: source.map(|s| s.to_string()),
        };
        Ok((directive, consumed))
    }

    /// Parse an undated single-line directive
    fn parse_line(
        trimmed: &str,
        line_number: usize,
        source: Option<&str>,
    ) -> Result<Directive, ParseError> {
        let keyword = trimmed.split_whitespace().next().unwrap_or_default();

        match keyword {
            "summary" => {
                let caps = SUMMARY_LINE.captures(trimmed).ok_or_else(|| {
                    ParseError::syntax(
                        source,
                        line_number,
                        "expected summary \"TITLE\" \"VALUE\" \"CHANGE\" up|down",
                    )
                })?;
                let trend = Trend::from_str(&caps[4])
                    .map_err(|e| ParseError::syntax(source, line_number, e))?;
                Ok(Directive::Summary(SummaryDirective {
                    title: caps[1].to_string(),
                    value: caps[2].to_string(),
                    change: caps[3].to_string(),
                    trend,
                }))
            }
            "member" => {
                let caps = MEMBER_LINE.captures(trimmed).ok_or_else(|| {
                    ParseError::syntax(source, line_number, "expected member \"NAME\" \"AVATAR\"")
                })?;
                Ok(Directive::Member(MemberDirective {
                    name: caps[1].to_string(),
                    avatar: caps[2].to_string(),
                }))
            }
            "extra_members" => {
                let caps = EXTRA_MEMBERS_LINE.captures(trimmed).ok_or_else(|| {
                    ParseError::syntax(source, line_number, "expected extra_members COUNT")
                })?;
                let count = caps[1].parse::<usize>().map_err(|_| {
                    ParseError::syntax(source, line_number, "member count out of range")
                })?;
                Ok(Directive::ExtraMembers(count))
            }
            "status" => {
                let caps = STATUS_LINE.captures(trimmed).ok_or_else(|| {
                    ParseError::syntax(source, line_number, "expected status \"LABEL\"")
                })?;
                Ok(Directive::Status(caps[1].to_string()))
            }
            other => Err(ParseError::UnsupportedDirective {
                location: location(source, line_number),
                directive_type: other.to_string(),
            }),
        }
    }
}

fn is_continuation(line: &str) -> bool {
    !line.trim().is_empty() && (line.starts_with(' ') || line.starts_with('\t'))
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_transaction() {
        let input = r#"2023-10-01 credit "Salary" 3000 USD"#;
        let directives = SimpleLedgerParser::parse(input).unwrap();
        assert_eq!(directives.len(), 1);

        if let Directive::Transaction(txn) = &directives[0].data {
            assert_eq!(txn.date, NaiveDate::from_ymd_opt(2023, 10, 1).unwrap());
            assert_eq!(txn.direction, Direction::Credit);
            assert_eq!(txn.remark, "Salary");
            assert_eq!(txn.amount, Decimal::from(3000));
            assert_eq!(txn.currency, "USD");
            assert!(txn.id().is_none());
        } else {
            panic!("Expected Transaction directive, got {:?}", directives[0].data);
        }
    }

    #[test]
    fn test_parse_transaction_with_metadata() {
        let input = "2023-10-06 Debit \"Rent\" -1,200.50 USD ; monthly\n  id: 6\n  note: \"flat 2\"\n";
        let directives = SimpleLedgerParser::parse(input).unwrap();
        assert_eq!(directives.len(), 1);
        assert_eq!(directives[0].span, SpanInfo { start: 1, end: 3 });

        if let Directive::Transaction(txn) = &directives[0].data {
            assert_eq!(txn.direction, Direction::Debit);
            assert_eq!(txn.amount, Decimal::from_str("-1200.50").unwrap());
            assert_eq!(txn.id(), Some("6"));
            assert_eq!(txn.meta.get("note").map(String::as_str), Some("flat 2"));
        } else {
            panic!("Expected Transaction directive");
        }
    }

    #[test]
    fn test_parse_dashboard_directives() {
        let input = r#"; dashboard chrome
summary "Total Balance" "$12,345" "+5%" up
summary "Total Debits" "$4,455" "-2%" down
member "Ava" "/placeholder.svg?height=32&width=32"
extra_members 12
status "Active"
"#;
        let directives = SimpleLedgerParser::parse(input).unwrap();
        assert_eq!(directives.len(), 5);

        match &directives[1].data {
            Directive::Summary(card) => {
                assert_eq!(card.title, "Total Debits");
                assert_eq!(card.value, "$4,455");
                assert_eq!(card.change, "-2%");
                assert_eq!(card.trend, Trend::Down);
            }
            other => panic!("Expected Summary directive, got {:?}", other),
        }
        assert!(matches!(&directives[2].data, Directive::Member(m) if m.name == "Ava"));
        assert!(matches!(directives[3].data, Directive::ExtraMembers(12)));
        assert!(matches!(&directives[4].data, Directive::Status(s) if s == "Active"));
        assert_eq!(directives[4].span.start, 6);
    }

    #[test]
    fn test_parse_multiple_transactions() {
        let input = r#"2023-10-01 credit "Salary" 3000 USD
  id: 1

# spending
2023-10-02 debit "Groceries" -150 USD
2023-10-03 debit "Gym Membership" -50 USD
"#;
        let directives = SimpleLedgerParser::parse(input).unwrap();
        assert_eq!(directives.len(), 3);
        assert_eq!(directives[1].span.start, 5);
    }

    #[test]
    fn test_invalid_date() {
        let err = SimpleLedgerParser::parse(r#"2023-02-30 debit "Dinner" -40 USD"#).unwrap_err();
        assert!(matches!(err, ParseError::SyntaxError { ref location, .. } if location == "line 1"));
    }

    #[test]
    fn test_malformed_transaction() {
        let err = SimpleLedgerParser::parse_with_source(
            "2023-10-04 debit Dinner -40 USD",
            Some("ledger.txt"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("ledger.txt:1"));
    }

    #[test]
    fn test_bad_metadata_line() {
        let input = "2023-10-04 debit \"Dinner\" -40 USD\n  not metadata\n";
        let err = SimpleLedgerParser::parse(input).unwrap_err();
        assert!(matches!(err, ParseError::SyntaxError { ref location, .. } if location == "line 2"));
    }

    #[test]
    fn test_orphan_indented_line() {
        let err = SimpleLedgerParser::parse("  id: 3\n").unwrap_err();
        assert!(matches!(err, ParseError::SyntaxError { .. }));
    }

    #[test]
    fn test_unsupported_directive() {
        let err = SimpleLedgerParser::parse("budget \"Food\" 300\n").unwrap_err();
        match err {
            ParseError::UnsupportedDirective { directive_type, location } => {
                assert_eq!(directive_type, "budget");
                assert_eq!(location, "line 1");
            }
            other => panic!("Expected UnsupportedDirective, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_trend() {
        let err = SimpleLedgerParser::parse(r#"summary "A" "1" "+1%" sideways"#).unwrap_err();
        assert!(err.to_string().contains("Invalid trend"));
    }
}
