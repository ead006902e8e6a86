//! Request handler definitions
//!
//! Define each route and its handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! A note about performance:
//! Since each worker thread processes its requests sequentially, handlers which block the current thread will cause
//! the current worker to stop processing new requests. For this reason, the database calls behind every handler are
//! expressed as futures and awaited, so worker threads keep handling other requests while a storage operation is
//! pending.
use actix_web::{get, web, HttpResponse, Responder};
use log::*;
use order_state_engine::{
    db_types::OrderStateId,
    traits::OrderStateManagement,
    OrderStateApi,
    OrderStateApiError,
};

use crate::{
    config::PublicUrl,
    data_objects::{
        CreatedOrderState,
        MessageResponse,
        NewOrderStateRequest,
        OrderStateList,
        RemovedOrderState,
        RequestHint,
    },
    errors::{validation_error_response, ServerError},
};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//----------------------------------------------   Create  -----------------------------------------------------------
route!(create_order_state => Post "/status" impl OrderStateManagement);
/// Route handler for creating a new order state record.
///
/// The request body carries the state label. The label is checked against the storage schema rules; a violation
/// yields a structured 400 response naming the offending field. On success, the created record is returned together
/// with a hint describing how to fetch it by id.
pub async fn create_order_state<B: OrderStateManagement>(
    body: web::Json<NewOrderStateRequest>,
    api: web::Data<OrderStateApi<B>>,
    public_url: web::Data<PublicUrl>,
) -> Result<HttpResponse, ServerError> {
    let NewOrderStateRequest { state } = body.into_inner();
    trace!("💻️ POST new order state [{state}]");
    match api.create_order_state(&state).await {
        Ok(order_state) => {
            let request = RequestHint::created_order_state(public_url.as_ref(), &order_state.id);
            let response = CreatedOrderState { new_order_state: order_state, request };
            Ok(HttpResponse::Created().json(response))
        },
        Err(OrderStateApiError::ValidationError(e)) => {
            debug!("💻️ New order state failed schema validation. {e}");
            Ok(validation_error_response(&e))
        },
        Err(e) => {
            debug!("💻️ Could not create order state. {e}");
            Err(ServerError::BackendError(e.to_string()))
        },
    }
}

//----------------------------------------------   Read  -------------------------------------------------------------
route!(order_states => Get "/status" impl OrderStateManagement);
/// Route handler for listing all order state records.
///
/// An empty store is reported as a 404 with a message, never as an empty 200 listing.
pub async fn order_states<B: OrderStateManagement>(
    api: web::Data<OrderStateApi<B>>,
    public_url: web::Data<PublicUrl>,
) -> Result<HttpResponse, ServerError> {
    trace!("💻️ GET all order states");
    let order_states = api.order_states().await.map_err(|e| {
        debug!("💻️ Could not fetch order states. {e}");
        ServerError::BackendError(e.to_string())
    })?;
    if order_states.is_empty() {
        let message = "No records for order states were found in the database.";
        return Ok(HttpResponse::NotFound().json(MessageResponse::new(message)));
    }
    Ok(HttpResponse::Ok().json(OrderStateList::new(order_states, public_url.as_ref())))
}

route!(order_state_by_id => Get "/status/{id}" impl OrderStateManagement);
pub async fn order_state_by_id<B: OrderStateManagement>(
    path: web::Path<OrderStateId>,
    api: web::Data<OrderStateApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    trace!("💻️ GET order state {id}");
    let order_state = api.order_state_by_id(&id).await.map_err(|e| {
        debug!("💻️ Could not fetch order state {id}. {e}");
        ServerError::BackendError(e.to_string())
    })?;
    match order_state {
        Some(order_state) => Ok(HttpResponse::Ok().json(order_state)),
        None => {
            let message = format!("Order state record with id equal to {id} could not be found in the database.");
            Ok(HttpResponse::NotFound().json(MessageResponse::new(message)))
        },
    }
}

//----------------------------------------------   Delete  -----------------------------------------------------------
route!(delete_order_state => Delete "/status/{id}" impl OrderStateManagement);
/// Route handler for removing a single order state record.
///
/// The find-and-remove is atomic in the storage layer; the removed record is echoed back on success.
pub async fn delete_order_state<B: OrderStateManagement>(
    path: web::Path<OrderStateId>,
    api: web::Data<OrderStateApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    debug!("💻️ DELETE order state {id}");
    let removed = api.delete_order_state(&id).await.map_err(|e| {
        debug!("💻️ Could not delete order state {id}. {e}");
        ServerError::BackendError(e.to_string())
    })?;
    match removed {
        Some(order_state) => {
            let message = format!("Order state record with id: {id} was deleted successfully from the database.");
            Ok(HttpResponse::Ok().json(RemovedOrderState { message, removed_order_state: order_state }))
        },
        None => {
            let message = format!("There is no order state record with id equal to {id} in the database.");
            Ok(HttpResponse::NotFound().json(MessageResponse::new(message)))
        },
    }
}
