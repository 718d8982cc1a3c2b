//! Declaration helpers.
//!
//! A [`Host`] is the object that owns reactive members, the way a component
//! instance owns its decorated fields and methods. Each helper checks the
//! kind of member it is applied to before registering anything:
//!
//! | helper     | member kind | registers                                   |
//! |------------|-------------|---------------------------------------------|
//! | `state`    | field       | `reactive(value, options)`                  |
//! | `property` | field       | a [`Ref`] read and written through the host |
//! | `computed` | field       | a [`Computed`] read through the host        |
//! | `effect`   | method      | an [`Effect`], first run deferred           |
//!
//! Applying a helper to the wrong kind of member fails immediately with
//! [`ReactiveError::InvalidDeclaration`].

use std::fmt;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{ReactiveError, Result};
use crate::reactive::{Computation, Computed, Effect, Observed, ReactiveOptions, Ref, Runtime};
use crate::value::Value;

/// The kind of class member a declaration is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Class,
    Method,
    Getter,
    Setter,
    Field,
    Accessor,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MemberKind::Class => "class",
            MemberKind::Method => "method",
            MemberKind::Getter => "getter",
            MemberKind::Setter => "setter",
            MemberKind::Field => "field",
            MemberKind::Accessor => "accessor",
        })
    }
}

/// A named member site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    name: String,
    kind: MemberKind,
}

impl Declaration {
    pub fn new(name: impl Into<String>, kind: MemberKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn field(name: impl Into<String>) -> Self {
        Self::new(name, MemberKind::Field)
    }

    pub fn method(name: impl Into<String>) -> Self {
        Self::new(name, MemberKind::Method)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> MemberKind {
        self.kind
    }
}

enum Member {
    State(Observed),
    Property(Ref),
    Computed(Computed<Value>),
    Effect(Effect),
}

/// An object holding declared reactive members.
pub struct Host {
    runtime: Runtime,
    members: IndexMap<String, Member>,
}

impl Host {
    pub fn new(runtime: &Runtime) -> Self {
        Self {
            runtime: runtime.clone(),
            members: IndexMap::new(),
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    /// Declare a reactive state field.
    pub fn state(
        &mut self,
        decl: &Declaration,
        value: impl Into<Value>,
        options: ReactiveOptions,
    ) -> Result<Observed> {
        self.check("state", MemberKind::Field, decl)?;
        let observed = self.runtime.reactive(value, options);
        self.insert(decl, Member::State(observed.clone()));
        Ok(observed)
    }

    /// Declare a field backed by a reference cell.
    pub fn property(&mut self, decl: &Declaration, initial: impl Into<Value>) -> Result<Ref> {
        self.check("property", MemberKind::Field, decl)?;
        let cell = self.runtime.reference(initial);
        self.insert(decl, Member::Property(cell.clone()));
        Ok(cell)
    }

    /// Declare a computed field.
    pub fn computed<F>(&mut self, decl: &Declaration, getter: F) -> Result<Computed<Value>>
    where
        F: Fn() -> Value + 'static,
    {
        self.check("computed", MemberKind::Field, decl)?;
        let cell = self.runtime.computed(getter);
        self.insert(decl, Member::Computed(cell.clone()));
        Ok(cell)
    }

    /// Declare an effect method. Its first run waits for the next
    /// scheduling boundary, after the host is fully initialized.
    pub fn effect<F>(&mut self, decl: &Declaration, body: F) -> Result<Effect>
    where
        F: Fn() + 'static,
    {
        self.check("effect", MemberKind::Method, decl)?;
        let computation = Computation::new(body).with_label(decl.name().to_string());
        let effect = self.runtime.defer(computation);
        self.insert(decl, Member::Effect(effect.clone()));
        Ok(effect)
    }

    /// Read a member the way a field access would.
    pub fn get(&self, name: &str) -> Result<Observed> {
        match self.member(name)? {
            Member::State(observed) => Ok(observed.clone()),
            Member::Property(cell) => Ok(cell.get()),
            Member::Computed(cell) => Ok(Observed::Plain(cell.get())),
            Member::Effect(_) => Err(ReactiveError::NotReadable(name.to_string())),
        }
    }

    /// Assign a member. Only properties are writable.
    pub fn set(&self, name: &str, value: impl Into<Value>) -> Result<()> {
        match self.member(name)? {
            Member::Property(cell) => {
                cell.set(value);
                Ok(())
            }
            _ => Err(ReactiveError::NotWritable(name.to_string())),
        }
    }

    /// Declared member names, in declaration order.
    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    /// Stop every effect and computed cell declared on this host.
    pub fn dispose(&self) {
        for member in self.members.values() {
            match member {
                Member::Effect(effect) => effect.dispose(),
                Member::Computed(cell) => cell.dispose(),
                Member::State(_) | Member::Property(_) => {}
            }
        }
    }

    fn check(&self, helper: &'static str, expected: MemberKind, decl: &Declaration) -> Result<()> {
        if decl.kind() != expected {
            return Err(ReactiveError::InvalidDeclaration {
                helper,
                expected,
                found: decl.kind(),
            });
        }
        if self.members.contains_key(decl.name()) {
            return Err(ReactiveError::DuplicateMember(decl.name().to_string()));
        }
        debug!(helper, member = decl.name(), "declared");
        Ok(())
    }

    fn insert(&mut self, decl: &Declaration, member: Member) {
        self.members.insert(decl.name().to_string(), member);
    }

    fn member(&self, name: &str) -> Result<&Member> {
        self.members
            .get(name)
            .ok_or_else(|| ReactiveError::UnknownMember(name.to_string()))
    }
}

impl fmt::Debug for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Host")
            .field("members", &self.members.keys().collect::<Vec<_>>())
            .finish()
    }
}
