use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionValue {
    pub position: i64,
    pub value: f64,
}

/// A position-scored sample table: rows of `(amino-acid position, value)`.
///
/// Several rows may share a position (one per sample in a multi-sample table). Row order is
/// preserved, so "the first value at a position" is well defined.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionTable {
    rows: Vec<PositionValue>,
}

impl PositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, position: i64, value: f64) {
        self.rows.push(PositionValue { position, value });
    }

    pub fn rows(&self) -> &[PositionValue] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values grouped by position, positions ascending, values in row order.
    pub fn grouped(&self) -> BTreeMap<i64, Vec<f64>> {
        let mut groups: BTreeMap<i64, Vec<f64>> = BTreeMap::new();
        for row in &self.rows {
            groups.entry(row.position).or_default().push(row.value);
        }
        groups
    }

    /// Values at a single position in row order.
    pub fn values_at(&self, position: i64) -> Vec<f64> {
        self.rows
            .iter()
            .filter(|row| row.position == position)
            .map(|row| row.value)
            .collect()
    }
}

impl FromIterator<(i64, f64)> for PositionTable {
    fn from_iter<T: IntoIterator<Item = (i64, f64)>>(iter: T) -> Self {
        Self {
            rows: iter
                .into_iter()
                .map(|(position, value)| PositionValue { position, value })
                .collect(),
        }
    }
}
