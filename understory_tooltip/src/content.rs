// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Content templates, context chains, and the binder that keeps one instance live.
//!
//! ## Overview
//!
//! A tooltip's content is a template stamped into the overlay's content root
//! against a [`ContextChain`]: the template's ambient contexts, then a
//! [`TooltipFrame`] for the tooltip itself, then any contexts the caller supplied
//! when the hover began. The template engine is opaque; it is reached through
//! [`ContentRoot`].
//!
//! [`ContentBinder`] keeps at most one instance attached. A reveal with the same
//! caller contexts (by pointer identity) reuses the live instance; different
//! contexts detach it and clear the root before the new instance is attached, so
//! stale content never shares the root with fresh content. The tooltip frame is
//! live: when the tooltip's text differs from what a reused instance shows, the
//! root is asked to [`refresh`](ContentRoot::refresh) it.
//!
//! ## Template resolution
//!
//! [`resolve_template`] picks, in order: an explicit template, whatever a
//! [`TemplateResolver`] discovers, and finally [`TooltipContent::Text`], a trivial
//! template that renders the tooltip's text.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::logging::{debug, trace};

/// What gets stamped into the content root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TooltipContent<T> {
    /// A host template.
    Template(T),
    /// The default template: the tooltip's text, nothing else.
    Text,
}

/// A resolved template plus the ambient contexts captured with it.
#[derive(Clone, Debug)]
pub struct ContentTemplate<T, C> {
    /// Template to stamp.
    pub content: TooltipContent<T>,
    /// Contexts captured where the template was found; first in the chain.
    pub ambient: Rc<[C]>,
}

impl<T, C> ContentTemplate<T, C> {
    /// A host template with no ambient contexts.
    pub fn new(template: T) -> Self {
        Self::with_ambient(template, Vec::<C>::new())
    }

    /// A host template with ambient contexts.
    pub fn with_ambient(template: T, ambient: impl Into<Rc<[C]>>) -> Self {
        Self {
            content: TooltipContent::Template(template),
            ambient: ambient.into(),
        }
    }

    /// The default text template.
    pub fn text() -> Self {
        Self {
            content: TooltipContent::Text,
            ambient: Rc::from(Vec::new()),
        }
    }
}

/// Source of discovered templates (for example, one embedded in the host markup).
pub trait TemplateResolver<T, C> {
    /// Return the discovered template, if any.
    fn resolve(&self) -> Option<ContentTemplate<T, C>>;
}

impl<T, C, F> TemplateResolver<T, C> for F
where
    F: Fn() -> Option<ContentTemplate<T, C>>,
{
    fn resolve(&self) -> Option<ContentTemplate<T, C>> {
        self()
    }
}

/// A resolver that never discovers anything.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoDiscovery;

impl<T, C> TemplateResolver<T, C> for NoDiscovery {
    #[inline]
    fn resolve(&self) -> Option<ContentTemplate<T, C>> {
        None
    }
}

/// Resolve a tooltip's template: explicit, then discovered, then text.
pub fn resolve_template<T, C>(
    explicit: Option<T>,
    resolver: &impl TemplateResolver<T, C>,
) -> ContentTemplate<T, C> {
    if let Some(template) = explicit {
        return ContentTemplate::new(template);
    }
    resolver.resolve().unwrap_or_else(ContentTemplate::text)
}

/// The tooltip's own entry in a context chain.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TooltipFrame {
    /// The tooltip's plain text as of the latest reveal.
    pub text: Option<String>,
}

/// One entry of a flattened [`ContextChain`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContextFrame<'a, C> {
    /// A context captured with the template.
    Ambient(&'a C),
    /// The tooltip itself.
    Tooltip(&'a TooltipFrame),
    /// A context supplied by the caller that began the hover.
    Caller(&'a C),
}

/// Ordered contexts a template instance is bound to.
///
/// Flattens to `ambient ++ [tooltip] ++ caller`.
#[derive(Clone, Debug)]
pub struct ContextChain<C> {
    ambient: Rc<[C]>,
    tooltip: TooltipFrame,
    caller: Option<Rc<[C]>>,
}

impl<C> ContextChain<C> {
    /// Build a chain.
    pub fn new(ambient: Rc<[C]>, tooltip: TooltipFrame, caller: Option<Rc<[C]>>) -> Self {
        Self {
            ambient,
            tooltip,
            caller,
        }
    }

    /// The frames in lookup order.
    pub fn frames(&self) -> impl Iterator<Item = ContextFrame<'_, C>> + '_ {
        let ambient = self.ambient.iter().map(ContextFrame::Ambient);
        let caller = self.caller.iter().flat_map(|c| c.iter().map(ContextFrame::Caller));
        ambient
            .chain(core::iter::once(ContextFrame::Tooltip(&self.tooltip)))
            .chain(caller)
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.ambient.len() + 1 + self.caller.as_ref().map_or(0, |c| c.len())
    }

    /// Always false: a chain holds at least the tooltip frame.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The tooltip frame.
    pub fn tooltip(&self) -> &TooltipFrame {
        &self.tooltip
    }

    /// The caller-supplied contexts.
    pub fn caller(&self) -> Option<&Rc<[C]>> {
        self.caller.as_ref()
    }

    /// Whether `caller` is the same context list (by identity) this chain was built with.
    pub fn has_caller(&self, caller: Option<&Rc<[C]>>) -> bool {
        match (&self.caller, caller) {
            (None, None) => true,
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// The overlay's content root together with the template engine that fills it.
pub trait ContentRoot {
    /// Host template type.
    type Template;
    /// Host context object type.
    type Context;
    /// Handle of one attached template instance.
    type Instance;

    /// Stamp `content` into the root, bound to `chain`.
    fn attach(
        &mut self,
        content: &TooltipContent<Self::Template>,
        chain: &ContextChain<Self::Context>,
    ) -> Self::Instance;

    /// The tooltip frame of a live instance changed; re-render what depends on it.
    fn refresh(&mut self, instance: &mut Self::Instance, chain: &ContextChain<Self::Context>);

    /// Release an instance's bindings and remove its nodes.
    fn detach(&mut self, instance: Self::Instance);

    /// Remove every node left in the root.
    fn clear(&mut self);
}

/// Result of [`ContentBinder::ensure_bound`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum BindOutcome {
    /// The live instance already had this chain.
    Reused,
    /// The live instance was kept and its tooltip frame refreshed.
    Refreshed,
    /// Nothing was bound; a fresh instance was attached.
    Attached,
    /// The previous instance was detached and a new one attached.
    Rebound,
    /// No template: the root is left empty.
    Empty,
}

struct Bound<R: ContentRoot> {
    instance: R::Instance,
    chain: ContextChain<R::Context>,
}

/// Keeps at most one template instance attached to a content root.
pub struct ContentBinder<R: ContentRoot> {
    root: R,
    bound: Option<Bound<R>>,
}

impl<R: ContentRoot> core::fmt::Debug for ContentBinder<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ContentBinder")
            .field("bound", &self.bound.is_some())
            .finish_non_exhaustive()
    }
}

impl<R: ContentRoot> ContentBinder<R> {
    /// Create a binder over an empty content root.
    pub fn new(root: R) -> Self {
        Self { root, bound: None }
    }

    /// The content root.
    pub fn root(&self) -> &R {
        &self.root
    }

    /// The content root, mutably.
    pub fn root_mut(&mut self) -> &mut R {
        &mut self.root
    }

    /// Whether an instance is attached.
    pub fn is_bound(&self) -> bool {
        self.bound.is_some()
    }

    /// Chain of the attached instance.
    pub fn chain(&self) -> Option<&ContextChain<R::Context>> {
        self.bound.as_ref().map(|b| &b.chain)
    }

    /// Make sure an instance bound to `caller` is attached.
    ///
    /// `text` goes into the tooltip frame; a reused instance whose frame holds
    /// different text is refreshed.
    pub fn ensure_bound(
        &mut self,
        template: Option<&ContentTemplate<R::Template, R::Context>>,
        text: Option<&str>,
        caller: Option<&Rc<[R::Context]>>,
    ) -> BindOutcome {
        let mut rebound = false;
        if let Some(bound) = &self.bound
            && !bound.chain.has_caller(caller)
        {
            trace!("caller contexts changed; detaching tooltip content");
            self.release();
            rebound = true;
        }
        if let Some(bound) = &mut self.bound {
            if bound.chain.tooltip.text.as_deref() == text {
                return BindOutcome::Reused;
            }
            trace!("tooltip text changed; refreshing content");
            bound.chain.tooltip.text = text.map(String::from);
            self.root.refresh(&mut bound.instance, &bound.chain);
            return BindOutcome::Refreshed;
        }

        let Some(template) = template else {
            debug!("no tooltip template resolved; content left empty");
            return BindOutcome::Empty;
        };
        let chain = ContextChain::new(
            template.ambient.clone(),
            TooltipFrame {
                text: text.map(String::from),
            },
            caller.cloned(),
        );
        let instance = self.root.attach(&template.content, &chain);
        self.bound = Some(Bound { instance, chain });
        if rebound {
            BindOutcome::Rebound
        } else {
            BindOutcome::Attached
        }
    }

    /// Detach the live instance, if any, and clear the root.
    pub fn release(&mut self) {
        if let Some(bound) = self.bound.take() {
            self.root.detach(bound.instance);
            self.root.clear();
        }
    }
}
