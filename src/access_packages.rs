//! Builders for entitlement-management access packages.

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::Method;

use crate::adapter::RequestAdapter;
use crate::builder::{BaseRequestBuilder, CountRequestBuilder};
use crate::error::Result;
use crate::models::{AccessPackage, ODataCollection};
use crate::odata::{CollectionQueryParameters, ItemQueryParameters};
use crate::request::{ErrorMappings, RequestConfiguration, RequestInformation};

const ACCESS_PACKAGES_TEMPLATE: &str = "{+baseurl}/identityGovernance/entitlementManagement/accessPackages{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
const ACCESS_PACKAGES_COUNT_TEMPLATE: &str = "{+baseurl}/identityGovernance/entitlementManagement/accessPackages/$count{?%24filter,%24search}";
const ACCESS_PACKAGE_ITEM_TEMPLATE: &str = "{+baseurl}/identityGovernance/entitlementManagement/accessPackages/{accessPackage%2Did}{?%24expand,%24select}";

/// Builder for the access-packages collection.
pub struct AccessPackagesRequestBuilder {
    base: BaseRequestBuilder,
}

impl AccessPackagesRequestBuilder {
    pub(crate) fn new(
        path_parameters: HashMap<String, String>,
        adapter: Arc<dyn RequestAdapter>,
    ) -> Self {
        AccessPackagesRequestBuilder {
            base: BaseRequestBuilder::new(ACCESS_PACKAGES_TEMPLATE, path_parameters, adapter),
        }
    }

    /// Builds from a literal URL, e.g. an `@odata.nextLink` of a previous
    /// page.
    pub fn with_url(raw_url: impl Into<String>, adapter: Arc<dyn RequestAdapter>) -> Self {
        AccessPackagesRequestBuilder {
            base: BaseRequestBuilder::with_raw_url(ACCESS_PACKAGES_TEMPLATE, raw_url, adapter),
        }
    }

    /// Descends into a single access package by id.
    pub fn by_access_package_id(&self, access_package_id: &str) -> AccessPackageItemRequestBuilder {
        AccessPackageItemRequestBuilder {
            base: BaseRequestBuilder::new(
                ACCESS_PACKAGE_ITEM_TEMPLATE,
                self.base
                    .child_parameters(&[("accessPackage%2Did", access_package_id)]),
                self.base.adapter(),
            ),
        }
    }

    /// The `$count` sibling of this collection.
    pub fn count(&self) -> CountRequestBuilder {
        CountRequestBuilder::new(
            ACCESS_PACKAGES_COUNT_TEMPLATE,
            self.base.path_parameters().clone(),
            self.base.adapter(),
        )
    }

    /// Request description for listing access packages.
    pub fn to_get_request_information(
        &self,
        request_configuration: Option<&RequestConfiguration<CollectionQueryParameters>>,
    ) -> RequestInformation {
        self.base
            .to_request_information(Method::GET, request_configuration)
    }

    /// Lists access packages.
    pub async fn get(
        &self,
        request_configuration: Option<&RequestConfiguration<CollectionQueryParameters>>,
    ) -> Result<Option<ODataCollection<AccessPackage>>> {
        let request = self.to_get_request_information(request_configuration);
        self.base
            .send_object(request, &ErrorMappings::odata())
            .await
    }

    /// Request description for creating an access package.
    pub fn to_post_request_information(
        &self,
        body: &AccessPackage,
        request_configuration: Option<&RequestConfiguration<()>>,
    ) -> Result<RequestInformation> {
        self.base
            .to_request_information_with_body(Method::POST, request_configuration, body)
    }

    /// Creates an access package and returns the created entity.
    pub async fn post(
        &self,
        body: &AccessPackage,
        request_configuration: Option<&RequestConfiguration<()>>,
    ) -> Result<Option<AccessPackage>> {
        let request = self.to_post_request_information(body, request_configuration)?;
        self.base
            .send_object(request, &ErrorMappings::odata())
            .await
    }
}

/// Builder for a single access package.
pub struct AccessPackageItemRequestBuilder {
    base: BaseRequestBuilder,
}

impl AccessPackageItemRequestBuilder {
    /// Request description for reading this package.
    pub fn to_get_request_information(
        &self,
        request_configuration: Option<&RequestConfiguration<ItemQueryParameters>>,
    ) -> RequestInformation {
        self.base
            .to_request_information(Method::GET, request_configuration)
    }

    /// Reads the access package.
    pub async fn get(
        &self,
        request_configuration: Option<&RequestConfiguration<ItemQueryParameters>>,
    ) -> Result<Option<AccessPackage>> {
        let request = self.to_get_request_information(request_configuration);
        self.base
            .send_object(request, &ErrorMappings::odata())
            .await
    }

    /// Request description for a partial update.
    pub fn to_patch_request_information(
        &self,
        body: &AccessPackage,
        request_configuration: Option<&RequestConfiguration<()>>,
    ) -> Result<RequestInformation> {
        self.base
            .to_request_information_with_body(Method::PATCH, request_configuration, body)
    }

    /// Partially updates the access package.
    pub async fn patch(
        &self,
        body: &AccessPackage,
        request_configuration: Option<&RequestConfiguration<()>>,
    ) -> Result<Option<AccessPackage>> {
        let request = self.to_patch_request_information(body, request_configuration)?;
        self.base
            .send_object(request, &ErrorMappings::odata())
            .await
    }

    /// Request description for deleting the package.
    pub fn to_delete_request_information(
        &self,
        request_configuration: Option<&RequestConfiguration<()>>,
    ) -> RequestInformation {
        self.base
            .to_request_information(Method::DELETE, request_configuration)
    }

    /// Deletes the access package.
    pub async fn delete(
        &self,
        request_configuration: Option<&RequestConfiguration<()>>,
    ) -> Result<()> {
        let request = self.to_delete_request_information(request_configuration);
        self.base
            .send_no_content(request, &ErrorMappings::odata())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    const BASE: &str = "https://graph.microsoft.com/v1.0";

    fn access_packages() -> AccessPackagesRequestBuilder {
        AccessPackagesRequestBuilder::new(HashMap::new(), test_support::adapter())
    }

    #[test]
    fn item_path_uses_the_access_package_id_placeholder() {
        let request = access_packages()
            .by_access_package_id("ap-1")
            .to_get_request_information(None);
        assert_eq!(
            request.uri(BASE).unwrap(),
            format!("{BASE}/identityGovernance/entitlementManagement/accessPackages/ap-1")
        );
    }

    #[test]
    fn create_body_carries_display_name_without_id() {
        let body = AccessPackage {
            display_name: Some("Sales resources".to_string()),
            ..Default::default()
        };
        let request = access_packages()
            .to_post_request_information(&body, None)
            .unwrap();
        assert_eq!(request.method, Method::POST);
        let json: serde_json::Value =
            serde_json::from_slice(request.content.as_deref().unwrap()).unwrap();
        assert_eq!(json["displayName"], "Sales resources");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn verbs_map_to_the_expected_http_methods() {
        let item = access_packages().by_access_package_id("ap-1");
        let body = AccessPackage::default();
        assert_eq!(item.to_get_request_information(None).method, Method::GET);
        assert_eq!(
            item.to_patch_request_information(&body, None).unwrap().method,
            Method::PATCH
        );
        assert_eq!(
            item.to_delete_request_information(None).method,
            Method::DELETE
        );
    }

    #[test]
    fn count_targets_the_dollar_count_segment() {
        let request = access_packages().count().to_get_request_information(None);
        assert_eq!(
            request.uri(BASE).unwrap(),
            format!("{BASE}/identityGovernance/entitlementManagement/accessPackages/$count")
        );
    }
}
