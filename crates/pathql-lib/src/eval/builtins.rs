//! Built-in functions callable from programs.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Load,
    Smb,
    SetStart,
    SetFinal,
    AddStart,
    AddFinal,
    GetStart,
    GetFinal,
    GetVertices,
    GetLabels,
    GetEdges,
    GetReachable,
    GetReachableVertices,
    Map,
    Filter,
    TwoCycles,
}

impl Builtin {
    pub const ALL: [Builtin; 16] = [
        Builtin::Load,
        Builtin::Smb,
        Builtin::SetStart,
        Builtin::SetFinal,
        Builtin::AddStart,
        Builtin::AddFinal,
        Builtin::GetStart,
        Builtin::GetFinal,
        Builtin::GetVertices,
        Builtin::GetLabels,
        Builtin::GetEdges,
        Builtin::GetReachable,
        Builtin::GetReachableVertices,
        Builtin::Map,
        Builtin::Filter,
        Builtin::TwoCycles,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Load => "load",
            Builtin::Smb => "smb",
            Builtin::SetStart => "set_start",
            Builtin::SetFinal => "set_final",
            Builtin::AddStart => "add_start",
            Builtin::AddFinal => "add_final",
            Builtin::GetStart => "get_start",
            Builtin::GetFinal => "get_final",
            Builtin::GetVertices => "get_vertices",
            Builtin::GetLabels => "get_labels",
            Builtin::GetEdges => "get_edges",
            Builtin::GetReachable => "get_reachable",
            Builtin::GetReachableVertices => "get_reachable_vertices",
            Builtin::Map => "map",
            Builtin::Filter => "filter",
            Builtin::TwoCycles => "two_cycles",
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Builtin::Load
            | Builtin::Smb
            | Builtin::GetStart
            | Builtin::GetFinal
            | Builtin::GetVertices
            | Builtin::GetLabels
            | Builtin::GetEdges
            | Builtin::GetReachable
            | Builtin::GetReachableVertices => 1,
            Builtin::SetStart
            | Builtin::SetFinal
            | Builtin::AddStart
            | Builtin::AddFinal
            | Builtin::Map
            | Builtin::Filter => 2,
            Builtin::TwoCycles => 4,
        }
    }

    /// `map` and `filter` take a lambda as their first argument.
    pub fn takes_lambda(self) -> bool {
        matches!(self, Builtin::Map | Builtin::Filter)
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
