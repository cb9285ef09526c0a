//! Serde model for rustdoc JSON output.
//!
//! The document is a flat index: `root` names the crate's root module,
//! `index` maps opaque string ids to items, and `paths` maps a subset of
//! those ids to fully-qualified path segments. Items and type expressions
//! are adjacently tagged (`kind` selects the variant, `inner` carries the
//! payload), so the enums here use `#[serde(tag = "kind", content =
//! "inner")]`.
//!
//! Only the fields extraction needs are modeled. Unknown fields are ignored,
//! `#[serde(default)]` is used liberally, and `#[serde(alias)]` absorbs kind
//! names that drifted between format versions (`method`/`function`,
//! `typedef`/`type_alias`, `import`/`use`). Unrecognized tags land in the
//! `Unknown` catch-all variants rather than failing deserialization; whether
//! an unknown kind is an error is the walker's decision, not the parser's.

use serde::Deserialize;
use std::collections::HashMap;

/// Newtype for rustdoc item ids.
///
/// Ids are opaque strings of the form `crate:local`, e.g. `0:42`; the
/// leading segment is the crate number the item was defined in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct Id(pub String);

impl Id {
    /// Whether this id names an item of the crate being documented.
    /// Crate number `0` is the local crate; anything else is external.
    pub fn is_local(&self) -> bool {
        self.0.split(':').next() == Some("0")
    }
}

/// Top-level rustdoc JSON document.
#[derive(Debug, Deserialize)]
pub struct Crate {
    /// Id of the root module item.
    pub root: Id,
    #[serde(default)]
    pub crate_version: Option<String>,
    /// All items, keyed by id.
    #[serde(default)]
    pub index: HashMap<String, Item>,
    /// Fully-qualified paths for a subset of ids.
    #[serde(default)]
    pub paths: HashMap<String, ItemSummary>,
    #[serde(default)]
    pub format_version: u32,
}

/// Path record: the ordered segments of an item's fully-qualified name.
#[derive(Debug, Deserialize)]
pub struct ItemSummary {
    #[serde(default)]
    pub path: Vec<String>,
    #[serde(default)]
    pub kind: Option<String>,
}

/// A single entry in the item index.
#[derive(Debug, Deserialize)]
pub struct Item {
    /// Echo of the index key.
    #[serde(default)]
    pub id: Option<Id>,
    /// Display name (absent for impl blocks).
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub docs: Option<String>,
    #[serde(flatten)]
    pub inner: ItemEnum,
}

/// Kind-tagged item payload.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", content = "inner", rename_all = "snake_case")]
pub enum ItemEnum {
    Module {
        #[serde(default)]
        items: Vec<Id>,
    },

    Struct {
        #[serde(default)]
        impls: Vec<Id>,
    },

    Enum {
        #[serde(default)]
        impls: Vec<Id>,
    },

    #[serde(alias = "method")]
    Function { decl: FnDecl },

    Impl {
        #[serde(default)]
        items: Vec<Id>,
    },

    #[serde(alias = "use")]
    Import {},

    #[serde(alias = "type_alias")]
    Typedef {},

    // Kinds the walker never graphs, modeled so a failed dispatch can name
    // them.
    ExternCrate {},
    StructField(Type),
    Variant(serde_json::Value),
    Trait {},
    Union {},
    Constant {},
    Static {},
    Macro(String),
    AssocConst {},
    AssocType {},

    /// Catch-all for unrecognized kinds.
    #[serde(other)]
    Unknown,
}

impl ItemEnum {
    /// The `kind` tag this variant was parsed from.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ItemEnum::Module { .. } => "module",
            ItemEnum::Struct { .. } => "struct",
            ItemEnum::Enum { .. } => "enum",
            ItemEnum::Function { .. } => "function",
            ItemEnum::Impl { .. } => "impl",
            ItemEnum::Import {} => "import",
            ItemEnum::Typedef {} => "typedef",
            ItemEnum::ExternCrate {} => "extern_crate",
            ItemEnum::StructField(_) => "struct_field",
            ItemEnum::Variant(_) => "variant",
            ItemEnum::Trait {} => "trait",
            ItemEnum::Union {} => "union",
            ItemEnum::Constant {} => "constant",
            ItemEnum::Static {} => "static",
            ItemEnum::Macro(_) => "macro",
            ItemEnum::AssocConst {} => "assoc_const",
            ItemEnum::AssocType {} => "assoc_type",
            ItemEnum::Unknown => "unknown",
        }
    }
}

/// Function or method declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct FnDecl {
    /// Parameter (name, type) pairs, in declaration order.
    #[serde(default)]
    pub inputs: Vec<(String, Type)>,
    /// Return type (absent for `-> ()`).
    #[serde(default)]
    pub output: Option<Type>,
    #[serde(default, alias = "is_c_variadic")]
    pub c_variadic: bool,
}

/// Kind-tagged type expression, as used for parameters and return values.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", content = "inner", rename_all = "snake_case")]
pub enum Type {
    /// A path that names a concrete target item.
    ResolvedPath {
        #[serde(default)]
        name: String,
        #[serde(default)]
        id: Option<Id>,
    },

    BorrowedRef {
        #[serde(default)]
        lifetime: Option<String>,
        #[serde(default, alias = "is_mutable")]
        mutable: bool,
        #[serde(rename = "type")]
        type_: Box<Type>,
    },

    Array {
        #[serde(rename = "type")]
        type_: Box<Type>,
        #[serde(default)]
        len: String,
    },

    RawPointer {
        #[serde(default, alias = "is_mutable")]
        mutable: bool,
        #[serde(rename = "type")]
        type_: Box<Type>,
    },

    /// Associated path like `<T as Trait>::Output`.
    QualifiedPath {
        #[serde(default)]
        name: String,
        self_type: Box<Type>,
    },

    Primitive(String),

    Generic(String),

    Slice(Box<Type>),

    Tuple(Vec<Type>),

    /// Catch-all for unrecognized type kinds; never resolvable.
    #[serde(other)]
    Unknown,
}
