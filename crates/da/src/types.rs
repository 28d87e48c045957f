//! Result model of the dependency analysis API.
//!
//! A [`ParseResult`] is a sequence of [`Chunk`]s (文節, clauses). Each chunk
//! names the chunk it depends on through `head`, forming a dependency forest,
//! and holds the [`Token`]s (morphemes) it is made of.
//!
//! The forest is taken as returned by the service: `head` values are not
//! validated, and the navigation helpers on [`ParseResult`] simply return
//! `None` for dangling references.

use serde::{Deserialize, Serialize};

/// Parameters of `jlp.daservice.parse`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ParseParams<'a> {
    /// Text to analyse.
    #[serde(rename = "q")]
    pub text: &'a str,
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// The analysis of one input text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Chunks in input order.
    pub chunks: Vec<Chunk>,
}

impl ParseResult {
    /// Returns the chunk whose `id` is `id`.
    pub fn chunk(&self, id: i32) -> Option<&Chunk> {
        self.chunks.iter().find(|c| c.id == id)
    }

    /// Returns the chunk `chunk` depends on, or `None` for a root chunk.
    pub fn head_of(&self, chunk: &Chunk) -> Option<&Chunk> {
        chunk.head_id().and_then(|head| self.chunk(head))
    }

    /// Returns the chunks that depend directly on chunk `id`, in input order.
    pub fn dependents(&self, id: i32) -> impl Iterator<Item = &Chunk> {
        self.chunks.iter().filter(move |c| c.head == id)
    }

    /// Returns the chunks that depend on no other chunk.
    pub fn roots(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.iter().filter(|c| c.is_root())
    }

    /// Reconstructs the analysed text by concatenating every chunk.
    pub fn text(&self) -> String {
        self.chunks.iter().map(Chunk::text).collect()
    }
}

// ---------------------------------------------------------------------------
// Chunk
// ---------------------------------------------------------------------------

/// `head` value of a chunk that depends on nothing.
pub const ROOT_HEAD: i32 = -1;

/// A clause: a contiguous span of tokens plus its dependency arc.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Id of the chunk this one depends on; [`ROOT_HEAD`] for none.
    pub head: i32,
    /// Index of this chunk within the result.
    pub id: i32,
    /// Morphemes of this chunk in order.
    pub tokens: Vec<Token>,
}

impl Chunk {
    /// Returns `true` if this chunk depends on no other chunk.
    pub fn is_root(&self) -> bool {
        self.head == ROOT_HEAD
    }

    /// Returns the head chunk id, or `None` for a root chunk.
    pub fn head_id(&self) -> Option<i32> {
        (!self.is_root()).then_some(self.head)
    }

    /// Returns the text span covered by this chunk.
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for token in &self.tokens {
            f.write_str(token.surface())?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// Position of a field within a [`Token`] tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenField {
    /// 表記
    Surface = 0,
    /// 読み
    Reading = 1,
    /// 基本形
    BaseForm = 2,
    /// 品詞
    PartOfSpeech = 3,
    /// 品詞細分類
    PosDetail = 4,
    /// 活用型
    ConjugationType = 5,
    /// 活用形
    ConjugationForm = 6,
}

/// A morpheme as a tuple of up to seven strings.
///
/// Missing trailing fields read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(Vec<String>);

impl Token {
    /// Creates a token from its fields in tuple order.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(fields.into_iter().map(Into::into).collect())
    }

    /// Returns `field`, or `""` when the tuple is too short.
    pub fn field(&self, field: TokenField) -> &str {
        self.0.get(field as usize).map_or("", String::as_str)
    }

    /// Returns all fields the service provided.
    pub fn fields(&self) -> &[String] {
        &self.0
    }

    /// Number of fields the service provided.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the token carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Surface form (表記).
    pub fn surface(&self) -> &str {
        self.field(TokenField::Surface)
    }

    /// Reading in kana (読み).
    pub fn reading(&self) -> &str {
        self.field(TokenField::Reading)
    }

    /// Dictionary form (基本形).
    pub fn base_form(&self) -> &str {
        self.field(TokenField::BaseForm)
    }

    /// Part of speech (品詞).
    pub fn part_of_speech(&self) -> &str {
        self.field(TokenField::PartOfSpeech)
    }

    /// Part-of-speech subcategory (品詞細分類).
    pub fn pos_detail(&self) -> &str {
        self.field(TokenField::PosDetail)
    }

    /// Conjugation type (活用型).
    pub fn conjugation_type(&self) -> &str {
        self.field(TokenField::ConjugationType)
    }

    /// Conjugation form (活用形).
    pub fn conjugation_form(&self) -> &str {
        self.field(TokenField::ConjugationForm)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.surface())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(head: i32, id: i32, surfaces: &[&str]) -> Chunk {
        Chunk {
            head,
            id,
            tokens: surfaces.iter().map(|s| Token::new([*s])).collect(),
        }
    }

    #[test]
    fn full_token_accessors() {
        let token = Token::new(["い", "い", "いる", "動詞", "*", "母音動詞", "基本連用形"]);
        assert_eq!(token.surface(), "い");
        assert_eq!(token.reading(), "い");
        assert_eq!(token.base_form(), "いる");
        assert_eq!(token.part_of_speech(), "動詞");
        assert_eq!(token.pos_detail(), "*");
        assert_eq!(token.conjugation_type(), "母音動詞");
        assert_eq!(token.conjugation_form(), "基本連用形");
    }

    #[test]
    fn short_token_reads_missing_fields_as_empty() {
        let token = Token::new(["庭", "にわ", "庭"]);
        assert_eq!(token.len(), 3);
        assert_eq!(token.base_form(), "庭");
        assert_eq!(token.part_of_speech(), "");
        assert_eq!(token.pos_detail(), "");
        assert_eq!(token.conjugation_type(), "");
        assert_eq!(token.conjugation_form(), "");
    }

    #[test]
    fn empty_token_reads_everything_as_empty() {
        let token = Token::default();
        assert!(token.is_empty());
        assert_eq!(token.surface(), "");
        assert_eq!(token.reading(), "");
        assert_eq!(token.to_string(), "");
    }

    #[test]
    fn token_deserialises_from_json_array() {
        let token: Token = serde_json::from_str(r#"["の","の","の","助詞","接続助詞","*","*"]"#)
            .unwrap();
        assert_eq!(token.surface(), "の");
        assert_eq!(token.pos_detail(), "接続助詞");
    }

    #[test]
    fn chunk_renders_surfaces_without_separator() {
        let c = chunk(3, 2, &["二", "羽", "鶏", "が"]);
        assert_eq!(c.to_string(), "二羽鶏が");
        assert_eq!(c.text(), "二羽鶏が");
    }

    #[test]
    fn chunk_without_tokens_renders_empty() {
        assert_eq!(chunk(-1, 0, &[]).to_string(), "");
    }

    #[test]
    fn root_chunk_has_no_head() {
        let root = chunk(ROOT_HEAD, 3, &["い", "ます"]);
        assert!(root.is_root());
        assert_eq!(root.head_id(), None);
        assert_eq!(chunk(3, 1, &["庭"]).head_id(), Some(3));
    }

    #[test]
    fn navigation_follows_heads() {
        let result = ParseResult {
            chunks: vec![
                chunk(1, 0, &["うち", "の"]),
                chunk(3, 1, &["庭", "に", "は"]),
                chunk(3, 2, &["二", "羽", "鶏", "が"]),
                chunk(-1, 3, &["い", "ます"]),
            ],
        };

        assert_eq!(result.text(), "うちの庭には二羽鶏がいます");
        let roots: Vec<i32> = result.roots().map(|c| c.id).collect();
        assert_eq!(roots, vec![3]);
        let deps: Vec<i32> = result.dependents(3).map(|c| c.id).collect();
        assert_eq!(deps, vec![1, 2]);
        assert_eq!(result.head_of(&result.chunks[0]).map(|c| c.id), Some(1));
        assert!(result.head_of(&result.chunks[3]).is_none());
    }

    #[test]
    fn dangling_head_is_not_resolved() {
        let result = ParseResult {
            chunks: vec![chunk(9, 0, &["x"])],
        };
        assert!(result.head_of(&result.chunks[0]).is_none());
        assert_eq!(result.roots().count(), 0);
    }

    #[test]
    fn params_serialise_text_as_q() {
        let params = ParseParams { text: "今日" };
        assert_eq!(serde_json::to_string(&params).unwrap(), r#"{"q":"今日"}"#);
    }
}
