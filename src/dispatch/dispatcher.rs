//! Dispatch of resolved routes to handler actions.

use crate::dispatch::context::RequestContext;
use crate::dispatch::handler::{HandlerError, Page};
use crate::dispatch::registry::HandlerRegistry;
use crate::routing::ResolvedRoute;

/// Terminal result of dispatching one request.
///
/// Every variant ends the request; there is no continuation to later
/// route rules after a match.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// The action produced a page.
    Completed(Page),

    /// The action produced no output; the configured fallback page was
    /// rendered instead.
    FallbackRendered(Page),

    /// No handler is registered under the resolved controller name.
    HandlerNotFound { controller: String },

    /// The handler exists but has no such action.
    ActionNotFound { controller: String, action: String },

    /// The action failed while running; details were logged, the caller
    /// only sees a generic failure.
    InvocationError { controller: String, action: String },
}

impl DispatchOutcome {
    /// Short label for metrics and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed(_) => "completed",
            Self::FallbackRendered(_) => "fallback",
            Self::HandlerNotFound { .. } => "handler_not_found",
            Self::ActionNotFound { .. } => "action_not_found",
            Self::InvocationError { .. } => "invocation_error",
        }
    }
}

/// Resolves controller names through the registry and runs actions.
pub struct Dispatcher {
    registry: HandlerRegistry,
    fallback: ResolvedRoute,
}

impl Dispatcher {
    /// Build a dispatcher over a populated registry.
    ///
    /// `fallback_route` is the internal route (e.g. `site/about`) rendered
    /// when an action completes without output.
    pub fn new(registry: HandlerRegistry, fallback_route: &str) -> Self {
        Self {
            registry,
            fallback: ResolvedRoute::parse(fallback_route.trim_matches('/')),
        }
    }

    /// Run one resolved route to a terminal outcome.
    ///
    /// Handler failures are logged here with the resolved controller and
    /// action names and never propagate further.
    pub fn dispatch(&self, route: &ResolvedRoute, ctx: &RequestContext) -> DispatchOutcome {
        let Some(handler) = self.registry.instantiate(&route.controller) else {
            tracing::warn!(
                request_id = %ctx.request_id,
                controller = %route.controller,
                "No handler registered"
            );
            return DispatchOutcome::HandlerNotFound {
                controller: route.controller.clone(),
            };
        };

        match handler.handle(&route.action, &route.params, ctx) {
            Ok(Some(page)) => DispatchOutcome::Completed(page),
            Ok(None) => {
                tracing::debug!(
                    request_id = %ctx.request_id,
                    controller = %route.controller,
                    action = %route.action,
                    "Action produced no output, rendering fallback"
                );
                self.render_fallback(route, ctx)
            }
            Err(HandlerError::UnknownAction(action)) => {
                tracing::warn!(
                    request_id = %ctx.request_id,
                    controller = %route.controller,
                    action = %action,
                    "No such action"
                );
                DispatchOutcome::ActionNotFound {
                    controller: route.controller.clone(),
                    action,
                }
            }
            Err(err) => {
                tracing::error!(
                    request_id = %ctx.request_id,
                    controller = %route.controller,
                    action = %route.action,
                    error = %err,
                    "Action failed"
                );
                DispatchOutcome::InvocationError {
                    controller: route.controller.clone(),
                    action: route.action.clone(),
                }
            }
        }
    }

    /// Single attempt at the configured fallback route. Does not recurse:
    /// a fallback that itself produces no page is an invocation error on
    /// the original route.
    fn render_fallback(&self, origin: &ResolvedRoute, ctx: &RequestContext) -> DispatchOutcome {
        let rendered = self
            .registry
            .instantiate(&self.fallback.controller)
            .map(|handler| handler.handle(&self.fallback.action, &self.fallback.params, ctx));

        match rendered {
            Some(Ok(Some(page))) => DispatchOutcome::FallbackRendered(page),
            _ => {
                tracing::error!(
                    request_id = %ctx.request_id,
                    fallback_controller = %self.fallback.controller,
                    fallback_action = %self.fallback.action,
                    "Fallback route did not produce a page"
                );
                DispatchOutcome::InvocationError {
                    controller: origin.controller.clone(),
                    action: origin.action.clone(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::handler::{ActionResult, Handler};
    use crate::session::SessionStore;

    struct EchoHandler;

    impl Handler for EchoHandler {
        fn handle(&self, action: &str, params: &[String], _ctx: &RequestContext) -> ActionResult {
            match action {
                "actionView" => Ok(Some(
                    Page::new("echo/view", "Echo").data(serde_json::json!({ "params": params })),
                )),
                "actionSilent" => Ok(None),
                "actionBroken" => Err(HandlerError::Internal("boom".to_string())),
                other => Err(HandlerError::UnknownAction(other.to_string())),
            }
        }
    }

    struct AboutHandler;

    impl Handler for AboutHandler {
        fn handle(&self, action: &str, _params: &[String], _ctx: &RequestContext) -> ActionResult {
            match action {
                "actionAbout" => Ok(Some(Page::new("about/index", "About"))),
                other => Err(HandlerError::UnknownAction(other.to_string())),
            }
        }
    }

    fn dispatcher() -> Dispatcher {
        let mut registry = HandlerRegistry::new();
        registry.register("EchoController", || Box::new(EchoHandler));
        registry.register("SiteController", || Box::new(AboutHandler));
        Dispatcher::new(registry, "site/about")
    }

    fn ctx() -> RequestContext {
        let (session, _) = SessionStore::new().open(None);
        RequestContext::new("test", "echo/view/1", session)
    }

    fn route(internal: &str) -> ResolvedRoute {
        ResolvedRoute::parse(internal)
    }

    #[test]
    fn test_completed_carries_the_page() {
        let outcome = dispatcher().dispatch(&route("echo/view/1/2"), &ctx());
        match outcome {
            DispatchOutcome::Completed(page) => {
                assert_eq!(page.view, "echo/view");
                assert_eq!(page.data["params"][1], "2");
            }
            other => panic!("unexpected outcome: {:?}", other.label()),
        }
    }

    #[test]
    fn test_unregistered_controller() {
        let outcome = dispatcher().dispatch(&route("ghost/view"), &ctx());
        assert!(matches!(outcome, DispatchOutcome::HandlerNotFound { .. }));
    }

    #[test]
    fn test_unknown_action() {
        let outcome = dispatcher().dispatch(&route("echo/missing"), &ctx());
        assert!(matches!(
            outcome,
            DispatchOutcome::ActionNotFound { ref action, .. } if action == "actionMissing"
        ));
    }

    #[test]
    fn test_handler_failure_is_contained() {
        let outcome = dispatcher().dispatch(&route("echo/broken"), &ctx());
        assert!(matches!(outcome, DispatchOutcome::InvocationError { .. }));
    }

    #[test]
    fn test_silent_action_renders_fallback() {
        let outcome = dispatcher().dispatch(&route("echo/silent"), &ctx());
        match outcome {
            DispatchOutcome::FallbackRendered(page) => assert_eq!(page.view, "about/index"),
            other => panic!("unexpected outcome: {:?}", other.label()),
        }
    }

    #[test]
    fn test_broken_fallback_is_an_invocation_error() {
        let mut registry = HandlerRegistry::new();
        registry.register("EchoController", || Box::new(EchoHandler));
        // Fallback points at a controller that is not registered.
        let dispatcher = Dispatcher::new(registry, "site/about");

        let outcome = dispatcher.dispatch(&route("echo/silent"), &ctx());
        assert!(matches!(
            outcome,
            DispatchOutcome::InvocationError { ref controller, .. } if controller == "EchoController"
        ));
    }
}
