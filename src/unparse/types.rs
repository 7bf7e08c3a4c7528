//! Type keyword rendering.

use super::Unparser;
use crate::ast::Type;

impl Unparser {
    /// Every type keyword in one place, so each kind has exactly one
    /// spelling. `void` in particular renders as `void`.
    pub(super) fn unparse_type(&mut self, ty: Type) {
        let text = match ty {
            Type::Int => "int",
            Type::IntPtr => "int *",
            Type::Char => "char",
            Type::CharPtr => "char *",
            Type::Bool => "bool",
            Type::BoolPtr => "bool *",
            Type::Void => "void",
        };
        self.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Located, Program, Type, VarDecl};
    use crate::ast::Decl;
    use crate::error::SourceLocation;
    use crate::unparse::unparse;

    fn var_decl(ty: Type, name: &str) -> Program {
        let pos = SourceLocation::start_of_file();
        Program {
            globals: vec![Located::new(
                Decl::Var(VarDecl {
                    ty: Located::new(ty, pos),
                    name: Located::new(name.to_string(), pos),
                }),
                pos,
            )],
        }
    }

    #[test]
    fn every_type_keyword_has_its_own_spelling() {
        let cases = [
            (Type::Int, "int x;\n"),
            (Type::IntPtr, "int * x;\n"),
            (Type::Char, "char x;\n"),
            (Type::CharPtr, "char * x;\n"),
            (Type::Bool, "bool x;\n"),
            (Type::BoolPtr, "bool * x;\n"),
            (Type::Void, "void x;\n"),
        ];
        for (ty, expected) in cases {
            assert_eq!(unparse(&var_decl(ty, "x")), expected);
        }
    }
}
