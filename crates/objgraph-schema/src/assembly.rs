// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Assembly (module) references.
//!
//! Compact types point into a five-entry assembly table. Each entry binds
//! lazily to a [`ModuleHandle`] through a [`ModuleLoader`]; a successful
//! bind is published once, a failed bind is reported and retried on the
//! next request.

use crate::config::ASSEMBLY_COUNT;
use crate::error::{Error, Result};
use arc_swap::ArcSwapOption;
use std::fmt;
use std::sync::Arc;

/// Wire id of a well-known assembly reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i16)]
pub enum AssemblyId {
    Base = -1,
    Core = -2,
    Framework = -3,
    System = -4,
    Runtime = -5,
}

impl AssemblyId {
    /// All references, in wire order.
    pub const ALL: [AssemblyId; ASSEMBLY_COUNT] = [
        AssemblyId::Base,
        AssemblyId::Core,
        AssemblyId::Framework,
        AssemblyId::System,
        AssemblyId::Runtime,
    ];

    /// Decode a wire id.
    pub fn from_wire(id: i16) -> Result<Self> {
        if id >= 0 {
            return Err(Error::InvalidIdentifier(id));
        }
        match id {
            -1 => Ok(AssemblyId::Base),
            -2 => Ok(AssemblyId::Core),
            -3 => Ok(AssemblyId::Framework),
            -4 => Ok(AssemblyId::System),
            -5 => Ok(AssemblyId::Runtime),
            _ => Err(Error::UnknownIdentifier(id)),
        }
    }

    pub fn wire(self) -> i16 {
        self as i16
    }

    /// Zero-based table position.
    pub fn index(self) -> usize {
        (-(self as i16) - 1) as usize
    }

    /// Module name types of this assembly are declared in.
    pub fn module_name(self) -> &'static str {
        match self {
            AssemblyId::Base => "Ui.Base",
            AssemblyId::Core => "Ui.Core",
            AssemblyId::Framework => "Ui.Framework",
            AssemblyId::System => "System",
            AssemblyId::Runtime => "System.Runtime",
        }
    }
}

impl fmt::Display for AssemblyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.module_name())
    }
}

/// A bound runtime module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleHandle {
    id: AssemblyId,
    name: Arc<str>,
    location: Option<Arc<str>>,
}

impl ModuleHandle {
    pub fn new(id: AssemblyId, name: &str) -> Self {
        Self {
            id,
            name: Arc::from(name),
            location: None,
        }
    }

    /// Attach where the module was loaded from.
    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(Arc::from(location));
        self
    }

    pub fn id(&self) -> AssemblyId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

/// Binds assembly references to runtime modules.
///
/// Errors are returned as a plain cause string; the registry wraps them
/// in [`Error::ModuleUnavailable`].
pub trait ModuleLoader: Send + Sync {
    fn load(&self, id: AssemblyId) -> core::result::Result<ModuleHandle, String>;
}

/// Loader for the statically linked object model: every reference binds to
/// its well-known module name.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticModuleLoader;

impl ModuleLoader for StaticModuleLoader {
    fn load(&self, id: AssemblyId) -> core::result::Result<ModuleHandle, String> {
        Ok(ModuleHandle::new(id, id.module_name()))
    }
}

/// Lazily bound assembly table.
///
/// Reads are lock-free; binding must run under the registry lock (see
/// [`bind_locked`](Self::bind_locked)).
pub(crate) struct AssemblyTable {
    slots: [ArcSwapOption<ModuleHandle>; ASSEMBLY_COUNT],
    loader: Arc<dyn ModuleLoader>,
}

impl AssemblyTable {
    pub(crate) fn new(loader: Arc<dyn ModuleLoader>) -> Self {
        Self {
            slots: Default::default(),
            loader,
        }
    }

    /// Already-bound module, if any.
    pub(crate) fn published(&self, id: AssemblyId) -> Option<Arc<ModuleHandle>> {
        self.slots[id.index()].load_full()
    }

    /// Bind `id`, caller holding the registry lock.
    pub(crate) fn bind_locked(&self, id: AssemblyId) -> Result<Arc<ModuleHandle>> {
        if let Some(module) = self.published(id) {
            return Ok(module);
        }
        match self.loader.load(id) {
            Ok(module) => {
                let module = Arc::new(module);
                log::debug!("[assembly] bound {} -> {}", id.wire(), module.name());
                self.slots[id.index()].store(Some(Arc::clone(&module)));
                Ok(module)
            }
            Err(reason) => {
                log::warn!("[assembly] failed to bind {}: {}", id, reason);
                Err(Error::ModuleUnavailable {
                    id: id.wire(),
                    reason,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FlakyLoader {
        calls: AtomicUsize,
    }

    impl ModuleLoader for FlakyLoader {
        fn load(&self, id: AssemblyId) -> core::result::Result<ModuleHandle, String> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                Err("disk not ready".to_string())
            } else {
                Ok(ModuleHandle::new(id, id.module_name()).with_location("/opt/ui"))
            }
        }
    }

    #[test]
    fn wire_ids_decode() {
        for id in AssemblyId::ALL {
            assert_eq!(AssemblyId::from_wire(id.wire()), Ok(id));
        }
        assert_eq!(AssemblyId::Base.index(), 0);
        assert_eq!(AssemblyId::Runtime.index(), 4);
        assert_eq!(AssemblyId::from_wire(0), Err(Error::InvalidIdentifier(0)));
        assert_eq!(AssemblyId::from_wire(-6), Err(Error::UnknownIdentifier(-6)));
    }

    #[test]
    fn failed_bind_is_not_cached() {
        let loader = Arc::new(FlakyLoader {
            calls: AtomicUsize::new(0),
        });
        let table = AssemblyTable::new(loader.clone());

        let err = table.bind_locked(AssemblyId::Core).unwrap_err();
        assert!(matches!(err, Error::ModuleUnavailable { id: -2, .. }));
        assert!(table.published(AssemblyId::Core).is_none());

        let module = table.bind_locked(AssemblyId::Core).expect("second bind");
        assert_eq!(module.name(), "Ui.Core");
        assert_eq!(module.location(), Some("/opt/ui"));

        let again = table.bind_locked(AssemblyId::Core).expect("cached");
        assert!(Arc::ptr_eq(&module, &again));
        assert_eq!(loader.calls.load(Ordering::SeqCst), 2);
    }
}
