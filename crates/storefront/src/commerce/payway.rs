//! Payment gateway session requests.
//!
//! One operation: ask the gateway for a QR payment session. The same call
//! doubles as the refresh when a session's validity window runs out.

use reqwest::Method;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use sphaerostyle_core::{PaymentMethod, UserId};

use super::{CommerceClient, CommerceError};

/// Gateway success code for an issued session.
const GATEWAY_OK: &str = "00";

/// View hint sent with every purchase request.
const VIEW_TYPE_POPUP: &str = "popup";

#[derive(Debug, Serialize)]
struct PurchaseRequest<'a> {
    user_id: UserId,
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
    payment_option: &'a str,
    view_type: &'a str,
}

#[derive(Debug, Deserialize)]
struct PurchaseResponse {
    #[serde(default, rename = "qrImage")]
    qr_image: Option<String>,
    #[serde(default)]
    tran_id: Option<String>,
    #[serde(default)]
    status: Option<GatewayStatus>,
}

#[derive(Debug, Deserialize)]
struct GatewayStatus {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// A freshly issued QR payment session.
#[derive(Debug, Clone)]
pub struct IssuedQr {
    /// QR image reference (URL or data URI) for the shopper to scan.
    pub qr_image: String,
    /// Gateway transaction identifier.
    pub tran_id: String,
}

impl CommerceClient {
    /// Request a QR payment session from the gateway.
    ///
    /// # Errors
    ///
    /// Returns `CommerceError::Declined` when the gateway answers with a
    /// non-`00` status or an incomplete session, and the usual transport
    /// errors otherwise.
    #[instrument(skip(self), fields(user_id = %user_id, method = %method))]
    pub async fn purchase(
        &self,
        user_id: UserId,
        amount: Decimal,
        method: PaymentMethod,
    ) -> Result<IssuedQr, CommerceError> {
        let response: PurchaseResponse = self
            .request_json(
                Method::POST,
                "/api/payway/purchase",
                None,
                &PurchaseRequest {
                    user_id,
                    amount,
                    payment_option: method.tag(),
                    view_type: VIEW_TYPE_POPUP,
                },
            )
            .await?;

        if let Some(status) = &response.status
            && status.code != GATEWAY_OK
        {
            return Err(CommerceError::Declined {
                code: status.code.clone(),
                message: if status.message.is_empty() {
                    "Unknown error".to_string()
                } else {
                    status.message.clone()
                },
            });
        }

        match (response.qr_image, response.tran_id) {
            (Some(qr_image), Some(tran_id)) => Ok(IssuedQr { qr_image, tran_id }),
            _ => Err(CommerceError::Declined {
                code: GATEWAY_OK.to_string(),
                message: "Gateway returned no QR session".to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_purchase_request_wire_shape() {
        let req = PurchaseRequest {
            user_id: UserId::new(4),
            amount: Decimal::new(2000, 2),
            payment_option: PaymentMethod::AbaPay.tag(),
            view_type: VIEW_TYPE_POPUP,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["user_id"], 4);
        assert_eq!(json["payment_option"], "abapay");
        assert_eq!(json["view_type"], "popup");
        assert!(json["amount"].is_number());
    }

    #[test]
    fn test_purchase_response_optional_fields() {
        let resp: PurchaseResponse = serde_json::from_str(
            r#"{"qrImage":"data:image/png;base64,xyz","tran_id":"t1","status":{"code":"00","message":"success"}}"#,
        )
        .unwrap();
        assert_eq!(resp.qr_image.unwrap(), "data:image/png;base64,xyz");
        assert_eq!(resp.tran_id.unwrap(), "t1");
        assert_eq!(resp.status.unwrap().code, "00");

        let bare: PurchaseResponse = serde_json::from_str(r"{}").unwrap();
        assert!(bare.qr_image.is_none());
    }
}
