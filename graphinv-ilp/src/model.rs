//! Binary programme construction.

/// Handle to a binary decision variable within one [`Model`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct VarId(pub(crate) usize);

/// Optimisation direction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Sense {
    /// Smallest objective value wins.
    Minimise,
    /// Largest objective value wins.
    Maximise,
}

/// Comparison operator of a linear constraint.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cmp {
    /// Left-hand side at most the bound.
    Le,
    /// Left-hand side at least the bound.
    Ge,
    /// Left-hand side exactly the bound.
    Eq,
}

/// An integer linear combination of variables.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LinExpr {
    pub(crate) terms: Vec<(VarId, i64)>,
}

impl LinExpr {
    /// The empty expression.
    #[must_use]
    pub const fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Appends `coeff * var` and returns the expression for chaining.
    #[must_use]
    pub fn term(mut self, var: VarId, coeff: i64) -> Self {
        self.terms.push((var, coeff));
        self
    }

    /// The unit-coefficient sum of `vars`.
    #[must_use]
    pub fn sum<I: IntoIterator<Item = VarId>>(vars: I) -> Self {
        Self {
            terms: vars.into_iter().map(|v| (v, 1)).collect(),
        }
    }
}

/// A linear constraint `expr cmp rhs`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Constraint {
    pub(crate) expr: LinExpr,
    pub(crate) cmp: Cmp,
    pub(crate) rhs: i64,
}

/// A complete binary programme, ready to hand to a [`Solve`] backend.
///
/// [`Solve`]: crate::Solve
#[derive(Clone, Debug)]
pub struct Model {
    pub(crate) num_vars: usize,
    pub(crate) sense: Sense,
    pub(crate) objective: LinExpr,
    pub(crate) constraints: Vec<Constraint>,
}

impl Model {
    /// Number of decision variables.
    #[must_use]
    pub const fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Number of constraints.
    #[must_use]
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }
}

/// Incremental builder for a [`Model`].
#[derive(Debug)]
pub struct ModelBuilder {
    num_vars: usize,
    sense: Sense,
    objective: LinExpr,
    constraints: Vec<Constraint>,
}

impl ModelBuilder {
    /// Starts a model that minimises its objective.
    #[must_use]
    pub const fn minimise() -> Self {
        Self::with_sense(Sense::Minimise)
    }

    /// Starts a model that maximises its objective.
    #[must_use]
    pub const fn maximise() -> Self {
        Self::with_sense(Sense::Maximise)
    }

    const fn with_sense(sense: Sense) -> Self {
        Self {
            num_vars: 0,
            sense,
            objective: LinExpr::new(),
            constraints: Vec::new(),
        }
    }

    /// Introduces a fresh binary variable.
    pub fn binary(&mut self) -> VarId {
        let id = VarId(self.num_vars);
        self.num_vars += 1;
        id
    }

    /// Introduces `count` fresh binary variables.
    pub fn binaries(&mut self, count: usize) -> Vec<VarId> {
        (0..count).map(|_| self.binary()).collect()
    }

    /// Sets the objective expression.
    pub fn objective(&mut self, expr: LinExpr) -> &mut Self {
        self.objective = expr;
        self
    }

    /// Adds `expr cmp rhs`.
    pub fn constraint(&mut self, expr: LinExpr, cmp: Cmp, rhs: i64) -> &mut Self {
        self.constraints.push(Constraint { expr, cmp, rhs });
        self
    }

    /// Adds `expr >= rhs`.
    pub fn ge(&mut self, expr: LinExpr, rhs: i64) -> &mut Self {
        self.constraint(expr, Cmp::Ge, rhs)
    }

    /// Adds `expr <= rhs`.
    pub fn le(&mut self, expr: LinExpr, rhs: i64) -> &mut Self {
        self.constraint(expr, Cmp::Le, rhs)
    }

    /// Adds `expr == rhs`.
    pub fn eq(&mut self, expr: LinExpr, rhs: i64) -> &mut Self {
        self.constraint(expr, Cmp::Eq, rhs)
    }

    /// Finalises the model.
    #[must_use]
    pub fn build(self) -> Model {
        Model {
            num_vars: self.num_vars,
            sense: self.sense,
            objective: self.objective,
            constraints: self.constraints,
        }
    }
}
