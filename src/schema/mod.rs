mod model;
mod sdl;

pub use model::{ArgDef, EnumValueDef, FieldDef, SchemaIndex, TypeDef, TypeKind};
