use super::Val;
use crate::error;
use crate::lang::{Error, Ident, LineNumber};
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Number,
    String,
}

impl Kind {
    pub fn of(ident: &Ident) -> Kind {
        if ident.is_string() {
            Kind::String
        } else {
            Kind::Number
        }
    }

    pub fn zero(self) -> Val {
        match self {
            Kind::Number => Val::Number(0.0),
            Kind::String => Val::String(String::new()),
        }
    }

    fn accepts(self, val: &Val) -> bool {
        matches!(
            (self, val),
            (Kind::Number, Val::Number(_)) | (Kind::String, Val::String(_))
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variable {
    pub name: String,
    pub value: Val,
    pub kind: Kind,
    pub last_changed: Option<LineNumber>,
}

/// One element position, 1-based per dimension. Displays as `2,3`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArrayKey(pub Vec<usize>);

impl std::fmt::Display for ArrayKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|i| i.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

impl Serialize for ArrayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Array {
    pub name: String,
    pub kind: Kind,
    pub dimensions: Vec<usize>,
    pub bounds: Vec<(usize, usize)>,
    pub values: BTreeMap<ArrayKey, Val>,
    pub last_changed: Option<LineNumber>,
    pub recently_read: BTreeSet<ArrayKey>,
    pub recently_written: BTreeSet<ArrayKey>,
}

impl Array {
    pub fn get(&self, indices: &[usize]) -> Val {
        match self.values.get(&ArrayKey(indices.to_vec())) {
            Some(val) => val.clone(),
            None => self.kind.zero(),
        }
    }
}

/// ## Variable memory
///
/// Scalars spring into existence on first write and read as zero or the
/// empty string before that. Arrays exist only after DIM.

#[derive(Debug, Default, Clone)]
pub struct Var {
    vars: BTreeMap<String, Variable>,
    arrays: BTreeMap<String, Array>,
    recently_changed: BTreeSet<String>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    /// Forget what the previous step touched.
    pub fn clear_recent(&mut self) {
        self.recently_changed.clear();
        for array in self.arrays.values_mut() {
            array.recently_read.clear();
            array.recently_written.clear();
        }
    }

    pub fn variables(&self) -> &BTreeMap<String, Variable> {
        &self.vars
    }

    pub fn arrays(&self) -> &BTreeMap<String, Array> {
        &self.arrays
    }

    pub fn recently_changed(&self) -> &BTreeSet<String> {
        &self.recently_changed
    }

    pub fn fetch(&self, ident: &Ident) -> Val {
        match self.vars.get(ident.name()) {
            Some(var) => var.value.clone(),
            None => Kind::of(ident).zero(),
        }
    }

    pub fn store(&mut self, ident: &Ident, value: Val, line: Option<LineNumber>) -> Result<()> {
        let kind = Kind::of(ident);
        if !kind.accepts(&value) {
            return Err(error!(TypeMismatch; ident.name()));
        }
        if self.vars.len() > u16::max_value() as usize {
            return Err(error!(OutOfMemory));
        }
        let name = ident.name().to_string();
        self.recently_changed.insert(name.clone());
        self.vars.insert(
            name.clone(),
            Variable {
                name,
                value,
                kind,
                last_changed: line,
            },
        );
        Ok(())
    }

    /// Declare an array with the given sizes. An existing array of the same
    /// name is replaced.
    pub fn dimension_array(
        &mut self,
        ident: &Ident,
        sizes: Vec<usize>,
        line: Option<LineNumber>,
    ) -> Result<()> {
        if sizes.is_empty() || sizes.contains(&0) {
            return Err(error!(DomainError; "ARRAY SIZE MUST BE POSITIVE"));
        }
        let name = ident.name().to_string();
        let array = Array {
            name: name.clone(),
            kind: Kind::of(ident),
            bounds: sizes.iter().map(|size| (1, *size)).collect(),
            dimensions: sizes,
            values: BTreeMap::new(),
            last_changed: line,
            recently_read: BTreeSet::new(),
            recently_written: BTreeSet::new(),
        };
        self.arrays.insert(name.clone(), array);
        self.recently_changed.insert(name);
        Ok(())
    }

    pub fn fetch_array(&mut self, ident: &Ident, indices: Vec<f64>) -> Result<Val> {
        let key = self.build_array_key(ident, indices)?;
        let array = self.array_mut(ident)?;
        let val = match array.values.get(&key) {
            Some(val) => val.clone(),
            None => array.kind.zero(),
        };
        array.recently_read.insert(key);
        Ok(val)
    }

    pub fn store_array(
        &mut self,
        ident: &Ident,
        indices: Vec<f64>,
        value: Val,
        line: Option<LineNumber>,
    ) -> Result<()> {
        let key = self.build_array_key(ident, indices)?;
        let array = self.array_mut(ident)?;
        if !array.kind.accepts(&value) {
            return Err(error!(TypeMismatch; ident.name()));
        }
        array.values.insert(key.clone(), value);
        array.recently_written.insert(key);
        array.last_changed = line;
        Ok(())
    }

    fn array_mut(&mut self, ident: &Ident) -> Result<&mut Array> {
        match self.arrays.get_mut(ident.name()) {
            Some(array) => Ok(array),
            None => Err(error!(ArrayNotDimensioned; ident.name())),
        }
    }

    fn build_array_key(&self, ident: &Ident, indices: Vec<f64>) -> Result<ArrayKey> {
        let array = match self.arrays.get(ident.name()) {
            Some(array) => array,
            None => return Err(error!(ArrayNotDimensioned; ident.name())),
        };
        if array.bounds.len() != indices.len() {
            return Err(error!(IndexOutOfBounds; format!(
                "{} HAS {} DIMENSION(S)",
                ident,
                array.bounds.len()
            )));
        }
        let mut key: Vec<usize> = vec![];
        for (index, (lower, upper)) in indices.iter().zip(&array.bounds) {
            let index = index.floor();
            if !(index >= *lower as f64 && index <= *upper as f64) {
                return Err(error!(IndexOutOfBounds; format!(
                    "{}({}) NOT IN {}..{}",
                    ident, index, lower, upper
                )));
            }
            key.push(index as usize);
        }
        Ok(ArrayKey(key))
    }
}
