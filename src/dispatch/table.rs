use super::pattern::RoutePattern;

/// Target of a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListStages,
    GetStage,
    CreateStage,
    UpdateStage,
    DeleteStage,
    Documentation,
}

/// Request body an operation expects, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyShape {
    CreateStage,
    UpdateStage,
}

impl Operation {
    pub fn body_shape(&self) -> Option<BodyShape> {
        match self {
            Operation::CreateStage => Some(BodyShape::CreateStage),
            Operation::UpdateStage => Some(BodyShape::UpdateStage),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Route {
    pub method: &'static str,
    pub pattern: RoutePattern,
    pub operation: Operation,
    pub description: &'static str,
    /// Name listed by the documentation endpoint
    pub function: &'static str,
}

impl Route {
    fn new(
        method: &'static str,
        pattern: &'static str,
        operation: Operation,
        description: &'static str,
        function: &'static str,
    ) -> Self {
        Self {
            method,
            pattern: RoutePattern::parse(pattern),
            operation,
            description,
            function,
        }
    }
}

/// A route that matched, with its wildcard captures in left-to-right order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub operation: Operation,
    /// Pattern of the route that matched, as declared
    pub pattern: &'static str,
    pub captures: Vec<String>,
}

/// Ordered route table; the first matching entry wins.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// The public HTTP surface
    pub fn standard() -> Self {
        Self::new(vec![
            Route::new(
                "GET",
                "constructionStages",
                Operation::ListStages,
                "Retrieve all construction stages",
                "getAllConstructionStages",
            ),
            Route::new(
                "GET",
                "constructionStages/(:num)",
                Operation::GetStage,
                "Retrieve a single construction stage by ID",
                "getSingleConstructionStage",
            ),
            Route::new(
                "POST",
                "constructionStages",
                Operation::CreateStage,
                "Create a new construction stage",
                "createConstructionStage",
            ),
            Route::new(
                "PATCH",
                "constructionStages/(:num)",
                Operation::UpdateStage,
                "Update an existing construction stage by ID",
                "updateConstructionStage",
            ),
            Route::new(
                "DELETE",
                "constructionStages/(:num)",
                Operation::DeleteStage,
                "Delete a construction stage by ID",
                "deleteConstructionStage",
            ),
            Route::new(
                "GET",
                "documentation",
                Operation::Documentation,
                "Describe the available endpoints",
                "document",
            ),
        ])
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Case-insensitive match of `method path` against the table, in declaration order
    pub fn find(&self, method: &str, path: &str) -> Option<RouteMatch> {
        self.routes
            .iter()
            .filter(|route| route.method.eq_ignore_ascii_case(method))
            .find_map(|route| {
                route.pattern.captures(path).map(|captures| RouteMatch {
                    operation: route.operation,
                    pattern: route.pattern.source(),
                    captures,
                })
            })
    }
}
