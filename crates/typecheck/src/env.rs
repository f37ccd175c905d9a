use crate::types::Ty;
use std::sync::Arc;

/// Persistent association list of (name, type-or-scheme). `extend` allocates
/// one node sharing the existing tail, so an older view of the environment
/// never observes later extensions. Shadowing works by lookup order: the
/// first match wins, prior bindings are never removed or overwritten.
#[derive(Clone, Default)]
pub struct Env(Option<Arc<Node>>);

struct Node {
    name: String,
    binding: Ty,
    rest: Option<Arc<Node>>,
}

impl Env {
    pub fn empty() -> Self {
        Env(None)
    }

    pub fn extend(&self, name: impl Into<String>, binding: Ty) -> Env {
        Env(Some(Arc::new(Node {
            name: name.into(),
            binding,
            rest: self.0.clone(),
        })))
    }

    pub fn lookup(&self, name: &str) -> Option<&Ty> {
        self.iter().find(|(n, _)| *n == name).map(|(_, ty)| ty)
    }

    /// Bindings from newest to oldest.
    pub fn iter(&self) -> Bindings<'_> {
        Bindings(self.0.as_deref())
    }

    pub fn from_pairs<I, N>(pairs: I) -> Env
    where
        I: IntoIterator<Item = (N, Ty)>,
        N: Into<String>,
    {
        pairs
            .into_iter()
            .fold(Env::empty(), |env, (name, ty)| env.extend(name, ty))
    }
}

pub struct Bindings<'a>(Option<&'a Node>);

impl<'a> Iterator for Bindings<'a> {
    type Item = (&'a str, &'a Ty);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.0?;
        self.0 = node.rest.as_deref();
        Some((node.name.as_str(), &node.binding))
    }
}

impl std::fmt::Debug for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
