use fnv::FnvHashMap;

use crate::instance::Variable;

#[derive(Clone, Debug)]
pub(crate) struct VariableRegister {
    names: Vec<String>,
    by_name: FnvHashMap<String, Variable>,
}

impl VariableRegister {
    pub(crate) fn new() -> VariableRegister {
        VariableRegister {
            names: vec![],
            by_name: FnvHashMap::default(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> VariableRegister {
        VariableRegister {
            names: Vec::with_capacity(capacity),
            by_name: FnvHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }

    pub(crate) fn get(&self, var: Variable) -> Option<&str> {
        self.names.get(var.index()).map(|n| n.as_str())
    }

    pub(crate) fn get_by_name(&self, name: &str) -> Option<Variable> {
        self.by_name.get(name).copied()
    }

    /// Registers a new variable. Names are not required to be unique, but
    /// lookups by name resolve to the first variable registered under it.
    pub(crate) fn create(&mut self, name: &str) -> Variable {
        let var = Variable(self.names.len() as u64);
        self.names.push(name.to_string());
        self.by_name.entry(name.to_string()).or_insert(var);
        var
    }

    /// Registers a variable named after its position (`x0`, `x1`, ...).
    pub(crate) fn create_anonymous(&mut self) -> Variable {
        let name = format!("x{}", self.names.len());
        self.create(&name)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = Variable> + '_ {
        (0..self.names.len() as u64).map(Variable)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_register_bookkeeping() {
        let mut reg = VariableRegister::new();
        let a = reg.create("a");
        let anon = reg.create_anonymous();
        let dup = reg.create("a");

        assert_eq!(reg.len(), 3);
        assert_eq!(reg.get(a), Some("a"));
        assert_eq!(reg.get(anon), Some("x1"));
        assert_eq!(reg.get_by_name("a"), Some(a));
        assert_ne!(dup, a);
        assert_eq!(reg.get(Variable(7)), None);
        assert_eq!(reg.iter().collect::<Vec<_>>(), vec![a, anon, dup]);
    }
}
