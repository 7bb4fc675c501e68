use std::io::{self, BufRead};

/// Record type named by the first token of a line.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Vertex,
    Face,
    Group,
    Comment,
    Other(String),
}

impl Record {
    fn from_keyword(keyword: &str) -> Record {
        match keyword {
            "v" => Record::Vertex,
            "f" => Record::Face,
            "g" => Record::Group,
            k if k.starts_with('#') => Record::Comment,
            _ => Record::Other(keyword.to_string()),
        }
    }

    pub fn keyword(&self) -> &str {
        match self {
            Record::Vertex => "v",
            Record::Face => "f",
            Record::Group => "g",
            Record::Comment => "#",
            Record::Other(keyword) => keyword,
        }
    }
}

/// One non-blank line split into its record type and remaining fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// 1-based position in the source.
    pub number: usize,
    pub record: Record,
    pub fields: Vec<String>,
}

pub struct Lexer<R> {
    reader: R,
    row: usize,
    buffer: String,
}

impl<R: BufRead> Lexer<R> {
    pub fn new(reader: R) -> Self {
        return Lexer {
            reader,
            row: 0,
            buffer: String::new(),
        };
    }

    /// Returns the next non-blank line, or `None` at end of input.
    pub fn next_line(&mut self) -> io::Result<Option<Line>> {
        loop {
            self.buffer.clear();
            if self.reader.read_line(&mut self.buffer)? == 0 {
                return Ok(None);
            }
            self.row += 1;

            let mut tokens = self.buffer.split_whitespace();
            let Some(keyword) = tokens.next() else {
                continue;
            };

            // A comment starts at a token beginning with `#`, not at any `#`.
            return Ok(Some(Line {
                number: self.row,
                record: Record::from_keyword(keyword),
                fields: tokens
                    .take_while(|token| !token.starts_with('#'))
                    .map(str::to_string)
                    .collect(),
            }));
        }
    }
}

impl<R: BufRead> Iterator for Lexer<R> {
    type Item = io::Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        return self.next_line().transpose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(text: &str) -> Vec<Line> {
        Lexer::new(text.as_bytes())
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn splits_record_and_fields() {
        let lines = lex("v 1 2.5 -3\nf 1 2 3 4\ng Cube\n");

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].record, Record::Vertex);
        assert_eq!(lines[0].fields, vec!["1", "2.5", "-3"]);
        assert_eq!(lines[1].record, Record::Face);
        assert_eq!(lines[1].fields.len(), 4);
        assert_eq!(lines[2].record, Record::Group);
        assert_eq!(lines[2].fields, vec!["Cube"]);
    }

    #[test]
    fn skips_blank_lines_but_counts_them() {
        let lines = lex("\n   \nv 0 0 0\n\t\nf 1\n");

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].number, 3);
        assert_eq!(lines[1].number, 5);
    }

    #[test]
    fn comments() {
        let lines = lex("# header\nv 1 2 3 # trailing\n#no space\n");

        assert_eq!(lines[0].record, Record::Comment);
        assert_eq!(lines[1].fields, vec!["1", "2", "3"]);
        assert_eq!(lines[2].record, Record::Comment);
    }

    #[test]
    fn hash_inside_a_token_is_not_a_comment() {
        let lines = lex("g part#2\nv 1 2 3 #4\n  # indented\n");

        assert_eq!(lines[0].fields, vec!["part#2"]);
        assert_eq!(lines[1].fields, vec!["1", "2", "3"]);
        assert_eq!(lines[2].record, Record::Comment);
        assert_eq!(lines[2].number, 3);
    }

    #[test]
    fn unknown_keywords_are_kept() {
        let lines = lex("vn 0 1 0\nusemtl red\n");

        assert_eq!(lines[0].record, Record::Other("vn".to_string()));
        assert_eq!(lines[1].record.keyword(), "usemtl");
    }

    #[test]
    fn crlf_and_missing_final_newline() {
        let lines = lex("g A\r\nv 1 2 3");

        assert_eq!(lines[0].fields, vec!["A"]);
        assert_eq!(lines[1].fields, vec!["1", "2", "3"]);
    }
}
