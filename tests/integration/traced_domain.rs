//! Domain objects as traced arguments and return values.

use crosscut_domain::domain_object;
use crosscut_trace::{BufferSink, SharedError, Tracer, call_context, impl_describe_display, ndc};

struct Customer {
    id: i64,
    name: String,
    orders: Vec<String>,
}

domain_object!(Customer { id, name, orders });
impl_describe_display!(Customer);

fn customer() -> Customer {
    Customer {
        id: 7,
        name: "amy".to_string(),
        orders: vec!["a-1".to_string(), "a-2".to_string()],
    }
}

#[test]
fn domain_object_argument_is_traced_structurally() {
    let sink = BufferSink::enabled();
    let tracer = Tracer::new(sink.clone());

    let c = customer();
    let ctx = call_context!(method: "register", args: [&c]);
    let result: Result<(), SharedError> = tracer.call_unit(&ctx, || Ok(()));
    assert!(result.is_ok());

    let entry = &sink.messages()[0];
    assert!(entry.contains("arg[0] {type=Customer; value="));
    assert!(entry.contains("Customer{id='7', name='amy', orders='"));
    // List fields stay bounded even inside trace lines.
    assert!(entry.contains("size=2"));
    assert!(!entry.contains("a-1"));
}

#[test]
fn domain_object_return_value_is_traced_structurally() {
    let sink = BufferSink::enabled();
    let tracer = Tracer::new(sink.clone());

    let ctx = call_context!(method: "load", args: []);
    let result: Result<Customer, SharedError> = tracer.call(&ctx, || Ok(customer()));
    assert_eq!(result.unwrap().id, 7);

    let exit = &sink.messages()[1];
    assert!(exit.contains("returned {type=Customer; value="));
    assert!(exit.contains("name='amy'"));
}

#[test]
fn tracing_failure_propagates_through_the_domain_call() {
    let sink = BufferSink::enabled();
    let tracer = Tracer::new(sink.clone());

    // A hand-built context with no target and no scope cannot resolve a
    // logger name; the failure surfaces as the call's own error type.
    let ctx = crosscut_trace::CallContext::new("load", "repo.rs", 4, &[]);
    let result: Result<Customer, SharedError> = tracer.call(&ctx, || Ok(customer()));
    assert!(result.is_err());
    assert!(sink.is_empty());
    assert_eq!(ndc::depth(), 0);
}
