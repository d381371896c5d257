//! Fault Boundary Component
//!
//! Wraps the page. The first error a descendant renders trips the boundary:
//! the subtree is torn down and a static diagnostic replaces it until the
//! page is reloaded. Panics abort the WASM instance and are reported by the
//! panic hook instead.
//!
//! Components that can fail take their place in the tree with
//! [`ComponentPath::enter`] and raise [`ComponentError`], so the diagnostic
//! can say where the fault happened.

use leptos::*;
use std::fmt;

const ROOT: &str = "FaultBoundary";

/// Where a component sits under the boundary, outermost first
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentPath(Vec<&'static str>);

impl ComponentPath {
    pub fn root() -> Self {
        Self(vec![ROOT])
    }

    pub fn child(&self, name: &'static str) -> Self {
        let mut names = self.0.clone();
        names.push(name);
        Self(names)
    }

    /// Extend the enclosing path with `name` and provide it to descendants
    pub fn enter(name: &'static str) -> Self {
        let path = use_context::<ComponentPath>()
            .unwrap_or_else(ComponentPath::root)
            .child(name);
        provide_context(path.clone());
        path
    }
}

impl fmt::Display for ComponentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" > "))
    }
}

/// A failure raised by a component, tagged with where it happened
#[derive(Clone, Debug)]
pub struct ComponentError {
    pub path: ComponentPath,
    pub message: String,
}

impl ComponentError {
    pub fn new(path: ComponentPath, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
        }
    }
}

impl fmt::Display for ComponentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ComponentError {}

/// Message and component path for one caught error; errors raised without
/// a path are attributed to the boundary itself
pub fn describe(error: &(dyn std::error::Error + 'static)) -> (String, String) {
    match error.downcast_ref::<ComponentError>() {
        Some(e) => (e.message.clone(), e.path.to_string()),
        None => (error.to_string(), ComponentPath::root().to_string()),
    }
}

/// Boundary that latches on the first caught error
#[component]
pub fn FaultBoundary(children: ChildrenFn) -> impl IntoView {
    let tripped = create_rw_signal(None::<(String, String)>);
    provide_context(ComponentPath::root());

    let fallback = move |errors: RwSignal<Errors>| {
        let fault = errors
            .get_untracked()
            .into_iter()
            .next()
            .map(|(_, e)| describe(&**e))
            .unwrap_or_else(|| ("Unknown error".to_string(), ROOT.to_string()));

        web_sys::console::error_1(
            &format!("Error caught by boundary: {} (in {})", fault.0, fault.1).into(),
        );

        // Latch outside the current render pass
        let latched = fault.clone();
        gloo_timers::callback::Timeout::new(0, move || {
            if tripped.get_untracked().is_none() {
                tripped.set(Some(latched));
            }
        })
        .forget();

        let (message, path) = fault;
        view! { <Diagnostic message=message path=path /> }
    };

    move || match tripped.get() {
        Some((message, path)) => view! { <Diagnostic message=message path=path /> }.into_view(),
        None => {
            let children = children.clone();
            view! {
                <ErrorBoundary fallback=fallback>
                    {children()}
                </ErrorBoundary>
            }
            .into_view()
        }
    }
}

#[component]
fn Diagnostic(message: String, path: String) -> impl IntoView {
    view! {
        <div class="error-container">
            <h2>"Something went wrong."</h2>
            <details style="white-space: pre-wrap">
                {message}
                "\n    in "
                {path}
            </details>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_display() {
        let path = ComponentPath::root().child("Dashboard").child("Chart");
        assert_eq!(path.to_string(), "FaultBoundary > Dashboard > Chart");
        assert_eq!(ComponentPath::root().to_string(), "FaultBoundary");
    }

    #[test]
    fn test_describe_component_error() {
        let path = ComponentPath::root().child("Dashboard").child("Chart");
        let error = ComponentError::new(path, "Chart error: 2d context unavailable");

        let (message, path) = describe(&error);
        assert_eq!(message, "Chart error: 2d context unavailable");
        assert_eq!(path, "FaultBoundary > Dashboard > Chart");
    }

    #[test]
    fn test_describe_untagged_error() {
        let error = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let (message, path) = describe(&error);
        assert_eq!(message, "boom");
        assert_eq!(path, "FaultBoundary");
    }
}
