use crate::error::{Result, TopologyError};
use crate::topology::{ShellId, SolidData, SolidId, TopologyStore};

/// Creates a solid from an outer shell and optional void shells.
pub struct MakeSolid {
    outer_shell: ShellId,
    inner_shells: Vec<ShellId>,
}

impl MakeSolid {
    /// Creates a new `MakeSolid` operation.
    #[must_use]
    pub fn new(outer_shell: ShellId, inner_shells: Vec<ShellId>) -> Self {
        Self {
            outer_shell,
            inner_shells,
        }
    }

    /// Executes the operation, creating the solid in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if a shell is missing or not closed.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        for shell in std::iter::once(self.outer_shell).chain(self.inner_shells.iter().copied()) {
            if !store.shell(shell)?.is_closed {
                return Err(
                    TopologyError::InvalidTopology("solid shells must be closed".into()).into(),
                );
            }
        }
        Ok(store.add_solid(SolidData {
            outer_shell: self.outer_shell,
            inner_shells: self.inner_shells.clone(),
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::topology::ShellData;

    #[test]
    fn open_shell_rejected() {
        let mut store = TopologyStore::new();
        let shell = store.add_shell(ShellData {
            faces: vec![],
            is_closed: false,
        });
        assert!(MakeSolid::new(shell, vec![]).execute(&mut store).is_err());
    }
}
