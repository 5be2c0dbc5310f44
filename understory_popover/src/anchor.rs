// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchoring modes.
//!
//! A popover is either anchored to an element the host already owns, or it
//! wraps its children in an invisible sizing container and anchors to that.
//! The container does not exist during the first render pass, so a wrapped
//! anchor starts out unresolved and becomes usable once the host reports the
//! container through [`AnchorSource::attach`].

/// Where a popover's anchor comes from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnchorSource<K> {
    /// An external element supplied by the caller.
    External(K),
    /// A wrapper container around the popover's children.
    Wrapped {
        /// The container, once mounted.
        container: Option<K>,
    },
}

impl<K: Copy> AnchorSource<K> {
    /// Pick the mode: external when an anchor is supplied, wrapped otherwise.
    pub fn from_option(anchor: Option<K>) -> Self {
        match anchor {
            Some(k) => Self::External(k),
            None => Self::Wrapped { container: None },
        }
    }

    /// The element to measure, if known.
    pub fn resolve(&self) -> Option<K> {
        match *self {
            Self::External(k) => Some(k),
            Self::Wrapped { container } => container,
        }
    }

    /// Whether this is a wrapped anchor.
    pub fn is_wrapped(&self) -> bool {
        matches!(self, Self::Wrapped { .. })
    }

    /// Record the mounted wrapper container. Returns `false` for external anchors.
    pub fn attach(&mut self, id: K) -> bool {
        match self {
            Self::External(_) => false,
            Self::Wrapped { container } => {
                *container = Some(id);
                true
            }
        }
    }

    /// Forget the wrapper container. Returns `false` for external anchors.
    pub fn detach(&mut self) -> bool {
        match self {
            Self::External(_) => false,
            Self::Wrapped { container } => {
                *container = None;
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_picks_mode() {
        assert_eq!(AnchorSource::from_option(Some(3_u32)), AnchorSource::External(3));
        let wrapped = AnchorSource::<u32>::from_option(None);
        assert!(wrapped.is_wrapped());
        assert_eq!(wrapped.resolve(), None);
    }

    #[test]
    fn wrapped_resolves_after_attach() {
        let mut a = AnchorSource::<u32>::from_option(None);
        assert!(a.attach(9));
        assert_eq!(a.resolve(), Some(9));
        assert!(a.detach());
        assert_eq!(a.resolve(), None);
    }

    #[test]
    fn external_ignores_container_lifecycle() {
        let mut a = AnchorSource::External(1_u32);
        assert!(!a.attach(2));
        assert!(!a.detach());
        assert_eq!(a.resolve(), Some(1));
    }
}
