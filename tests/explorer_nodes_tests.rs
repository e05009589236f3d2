#[cfg(test)]
mod tests {
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use awsexplorer::explorer::{
        AssetResolver, AwsTreeNode, ClientFactory, CloudFormationClient, ExplorerContext,
        FunctionConfig, FunctionNode, LambdaClient, Notifier, RegionInfo, RegionNode,
        RegionNodeCollection, StackNode, StackResource, StackSummary,
    };
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    struct FakeAssets;

    impl AssetResolver for FakeAssets {
        fn resolve_path(&self, relative_path: &str) -> PathBuf {
            PathBuf::from("/extension").join(relative_path)
        }
    }

    #[derive(Default)]
    struct SilentNotifier;

    impl Notifier for SilentNotifier {
        fn info(&self, _message: &str) {}
        fn error(&self, _message: &str) {}
        fn confirm(&self, _message: &str) -> bool {
            true
        }
    }

    #[derive(Default)]
    struct FakeCloudFormation {
        stacks: Mutex<Vec<StackSummary>>,
        resources: Mutex<HashMap<String, Vec<StackResource>>>,
        fail_list_stacks: AtomicBool,
        fail_describe: AtomicBool,
    }

    impl FakeCloudFormation {
        fn set_stacks(&self, stacks: Vec<StackSummary>) {
            *self.stacks.lock().unwrap() = stacks;
        }

        fn set_resources(&self, stack_name: &str, resources: Vec<StackResource>) {
            self.resources
                .lock()
                .unwrap()
                .insert(stack_name.to_string(), resources);
        }
    }

    #[async_trait]
    impl CloudFormationClient for FakeCloudFormation {
        async fn list_stacks(&self) -> Result<Vec<StackSummary>> {
            if self.fail_list_stacks.load(Ordering::SeqCst) {
                return Err(anyhow!("ListStacks: access denied"));
            }
            Ok(self.stacks.lock().unwrap().clone())
        }

        async fn describe_stack_resources(&self, stack_name: &str) -> Result<Vec<StackResource>> {
            if self.fail_describe.load(Ordering::SeqCst) {
                return Err(anyhow!("DescribeStackResources: throttled"));
            }
            Ok(self
                .resources
                .lock()
                .unwrap()
                .get(stack_name)
                .cloned()
                .unwrap_or_default())
        }

        async fn delete_stack(&self, _stack_name: &str) -> Result<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeLambda {
        functions: Mutex<Vec<FunctionConfig>>,
        fail_list: AtomicBool,
    }

    impl FakeLambda {
        fn set_functions(&self, names: &[&str]) {
            *self.functions.lock().unwrap() =
                names.iter().map(|name| FunctionConfig::new(*name)).collect();
        }
    }

    #[async_trait]
    impl LambdaClient for FakeLambda {
        async fn list_functions(&self) -> Result<Vec<FunctionConfig>> {
            if self.fail_list.load(Ordering::SeqCst) {
                return Err(anyhow!("ListFunctions: network error"));
            }
            Ok(self.functions.lock().unwrap().clone())
        }
    }

    struct FakeClients {
        cloudformation: Arc<FakeCloudFormation>,
        lambda: Arc<FakeLambda>,
    }

    impl ClientFactory for FakeClients {
        fn cloudformation(&self, _region_code: &str) -> Arc<dyn CloudFormationClient> {
            self.cloudformation.clone()
        }

        fn lambda(&self, _region_code: &str) -> Arc<dyn LambdaClient> {
            self.lambda.clone()
        }
    }

    struct Harness {
        cloudformation: Arc<FakeCloudFormation>,
        lambda: Arc<FakeLambda>,
        context: Arc<ExplorerContext>,
    }

    fn harness() -> Harness {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();

        let cloudformation = Arc::new(FakeCloudFormation::default());
        let lambda = Arc::new(FakeLambda::default());
        let context = Arc::new(ExplorerContext::new(
            Arc::new(FakeClients {
                cloudformation: cloudformation.clone(),
                lambda: lambda.clone(),
            }),
            Arc::new(FakeAssets),
            Arc::new(SilentNotifier),
        ));

        Harness {
            cloudformation,
            lambda,
            context,
        }
    }

    fn summary(name: &str, status: &str) -> StackSummary {
        StackSummary {
            stack_id: Some(format!(
                "arn:aws:cloudformation:us-east-1:123456789012:stack/{}/guid",
                name
            )),
            stack_name: name.to_string(),
            stack_status: status.to_string(),
        }
    }

    fn lambda_resource(physical_id: Option<&str>) -> StackResource {
        StackResource {
            resource_type: "AWS::Lambda::Function".to_string(),
            physical_resource_id: physical_id.map(str::to_string),
        }
    }

    fn labels(children: &[Arc<dyn AwsTreeNode>]) -> Vec<String> {
        children.iter().map(|child| child.label()).collect()
    }

    // --- region node shape ---

    #[test]
    fn region_node_has_fixed_two_children() {
        let fixture = harness();
        let region = RegionNode::new(RegionInfo::new("us-east-1"), fixture.context);

        let runtime = tokio::runtime::Runtime::new().unwrap();
        let first = runtime.block_on(region.get_children());
        let second = runtime.block_on(region.get_children());

        assert_eq!(labels(&first), vec!["CloudFormation", "Lambda"]);
        assert!(Arc::ptr_eq(&first[0], &second[0]));
        assert!(Arc::ptr_eq(&first[1], &second[1]));
    }

    #[test]
    fn region_node_update_changes_display_only() {
        let fixture = harness();
        let region = RegionNode::new(RegionInfo::new("us-east-1"), fixture.context);
        let groups_before = region.cloudformation();

        region.update(RegionInfo {
            region_code: "us-east-1".to_string(),
            region_name: "Renamed".to_string(),
        });

        assert_eq!(region.label(), "Renamed");
        assert_eq!(region.tooltip().unwrap(), "Renamed [us-east-1]");
        assert!(Arc::ptr_eq(&groups_before, &region.cloudformation()));
    }

    // --- stack membership resolution ---

    #[tokio::test]
    async fn stack_membership_joins_template_against_deployed_functions() {
        let fixture = harness();
        fixture.cloudformation.set_resources(
            "app",
            vec![
                lambda_resource(Some("f1")),
                StackResource {
                    resource_type: "AWS::S3::Bucket".to_string(),
                    physical_resource_id: Some("b1".to_string()),
                },
            ],
        );
        fixture.lambda.set_functions(&["f1", "f2"]);

        let stack = StackNode::new(
            summary("app", "CREATE_COMPLETE"),
            "us-east-1",
            fixture.context,
        );
        let children = stack.get_children().await;

        assert_eq!(labels(&children), vec!["f1"]);
    }

    #[tokio::test]
    async fn drift_removes_vanished_member_without_error() {
        let fixture = harness();
        fixture
            .cloudformation
            .set_resources("app", vec![lambda_resource(Some("f1"))]);
        fixture.lambda.set_functions(&["f1"]);

        let stack = StackNode::new(
            summary("app", "CREATE_COMPLETE"),
            "us-east-1",
            fixture.context,
        );
        assert_eq!(labels(&stack.get_children().await), vec!["f1"]);

        fixture.lambda.set_functions(&[]);
        let children = stack.get_children().await;

        assert_eq!(children.len(), 1);
        assert_eq!(children[0].context_tag(), "awsPlaceholderNode");
        assert_eq!(children[0].label(), "[no functions in this CloudFormation]");
    }

    #[tokio::test]
    async fn stack_children_sorted_by_name_case_insensitive() {
        let fixture = harness();
        fixture.cloudformation.set_resources(
            "app",
            vec![
                lambda_resource(Some("Charlie")),
                lambda_resource(Some("alpha")),
                lambda_resource(Some("Bravo")),
            ],
        );
        fixture.lambda.set_functions(&["Charlie", "alpha", "Bravo"]);

        let stack = StackNode::new(
            summary("app", "CREATE_COMPLETE"),
            "us-east-1",
            fixture.context,
        );
        let children = stack.get_children().await;

        assert_eq!(labels(&children), vec!["alpha", "Bravo", "Charlie"]);
    }

    #[tokio::test]
    async fn surviving_member_keeps_node_identity_across_refreshes() {
        let fixture = harness();
        fixture.cloudformation.set_resources(
            "app",
            vec![lambda_resource(Some("f1")), lambda_resource(Some("f2"))],
        );
        fixture.lambda.set_functions(&["f1", "f2"]);

        let stack = StackNode::new(
            summary("app", "CREATE_COMPLETE"),
            "us-east-1",
            fixture.context,
        );
        let before = stack.get_children().await;

        fixture
            .cloudformation
            .set_resources("app", vec![lambda_resource(Some("f1"))]);
        let after = stack.get_children().await;

        assert_eq!(labels(&after), vec!["f1"]);
        let f1_before = before.iter().find(|node| node.label() == "f1").unwrap();
        assert!(Arc::ptr_eq(f1_before, &after[0]));
    }

    #[tokio::test]
    async fn absent_physical_ids_share_one_sentinel_candidate() {
        // Resources without a physical id all map to the "none" sentinel;
        // they only surface if a function is actually named "none".
        let fixture = harness();
        fixture
            .cloudformation
            .set_resources("app", vec![lambda_resource(None), lambda_resource(None)]);
        fixture.lambda.set_functions(&["none"]);

        let stack = StackNode::new(
            summary("app", "CREATE_COMPLETE"),
            "us-east-1",
            fixture.context,
        );
        let children = stack.get_children().await;

        assert_eq!(labels(&children), vec!["none"]);
    }

    #[test]
    fn stack_node_exposes_identity_for_commands() {
        let fixture = harness();
        let stack = StackNode::new(
            summary("app", "CREATE_COMPLETE"),
            "us-east-1",
            fixture.context,
        );

        assert_eq!(stack.stack_name(), "app");
        assert_eq!(
            stack.stack_id().unwrap(),
            "arn:aws:cloudformation:us-east-1:123456789012:stack/app/guid"
        );
        assert_eq!(stack.region_code(), "us-east-1");
    }

    #[test]
    fn function_node_update_replaces_snapshot() {
        let node = FunctionNode::standalone(FunctionConfig::new("f1"), &FakeAssets);

        let mut updated = FunctionConfig::new("f1");
        updated.runtime = Some("python3.12".to_string());
        updated.function_arn = Some("arn:aws:lambda:us-east-1:123456789012:function:f1".to_string());
        node.update(updated.clone());

        assert_eq!(node.configuration(), updated);
        assert_eq!(
            node.tooltip().unwrap(),
            "arn:aws:lambda:us-east-1:123456789012:function:f1\npython3.12"
        );
    }

    // --- error containment ---

    #[tokio::test]
    async fn describe_failure_yields_single_error_child_and_preserves_cache() {
        let fixture = harness();
        fixture
            .cloudformation
            .set_resources("app", vec![lambda_resource(Some("f1"))]);
        fixture.lambda.set_functions(&["f1"]);

        let stack = StackNode::new(
            summary("app", "CREATE_COMPLETE"),
            "us-east-1",
            fixture.context,
        );
        let healthy = stack.get_children().await;
        assert_eq!(labels(&healthy), vec!["f1"]);

        fixture.cloudformation.fail_describe.store(true, Ordering::SeqCst);
        let failed = stack.get_children().await;
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].context_tag(), "awsErrorNode");
        assert_eq!(failed[0].label(), "Error loading CloudFormation resources");
        assert!(failed[0].tooltip().unwrap().contains("throttled"));

        // Recovery returns the same child instance the cache held before
        // the failed attempt: no partial merge happened.
        fixture
            .cloudformation
            .fail_describe
            .store(false, Ordering::SeqCst);
        let recovered = stack.get_children().await;
        assert_eq!(labels(&recovered), vec!["f1"]);
        assert!(Arc::ptr_eq(&healthy[0], &recovered[0]));
    }

    #[tokio::test]
    async fn list_functions_failure_is_contained_in_standalone_group() {
        let fixture = harness();
        fixture.lambda.set_functions(&["f1"]);

        let region = RegionNode::new(RegionInfo::new("us-east-1"), fixture.context);
        let group = region.standalone_functions();
        let healthy = group.get_children().await;
        assert_eq!(labels(&healthy), vec!["f1"]);

        fixture.lambda.fail_list.store(true, Ordering::SeqCst);
        let failed = group.get_children().await;
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].context_tag(), "awsErrorNode");
        assert_eq!(failed[0].label(), "Error loading Lambda resources");
        assert!(failed[0].tooltip().unwrap().contains("network error"));

        fixture.lambda.fail_list.store(false, Ordering::SeqCst);
        let recovered = group.get_children().await;
        assert_eq!(labels(&recovered), vec!["f1"]);
        assert!(Arc::ptr_eq(&healthy[0], &recovered[0]));
    }

    #[tokio::test]
    async fn list_functions_failure_after_describe_is_contained_in_stack() {
        let fixture = harness();
        fixture
            .cloudformation
            .set_resources("app", vec![lambda_resource(Some("f1"))]);
        fixture.lambda.set_functions(&["f1"]);

        let stack = StackNode::new(
            summary("app", "CREATE_COMPLETE"),
            "us-east-1",
            fixture.context,
        );
        let healthy = stack.get_children().await;
        assert_eq!(labels(&healthy), vec!["f1"]);

        // Describe still succeeds; the second fetch of the membership join
        // fails. Containment must behave the same.
        fixture.lambda.fail_list.store(true, Ordering::SeqCst);
        let failed = stack.get_children().await;
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].context_tag(), "awsErrorNode");

        fixture.lambda.fail_list.store(false, Ordering::SeqCst);
        let recovered = stack.get_children().await;
        assert_eq!(labels(&recovered), vec!["f1"]);
        assert!(Arc::ptr_eq(&healthy[0], &recovered[0]));
    }

    #[tokio::test]
    async fn list_stacks_failure_is_contained_in_group() {
        let fixture = harness();
        fixture
            .cloudformation
            .set_stacks(vec![summary("app", "CREATE_COMPLETE")]);

        let region = RegionNode::new(RegionInfo::new("us-east-1"), fixture.context);
        let group = region.cloudformation();
        let healthy = group.get_children().await;
        assert_eq!(labels(&healthy), vec!["app [CREATE_COMPLETE]"]);

        fixture
            .cloudformation
            .fail_list_stacks
            .store(true, Ordering::SeqCst);
        let failed = group.get_children().await;
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].context_tag(), "awsErrorNode");

        fixture
            .cloudformation
            .fail_list_stacks
            .store(false, Ordering::SeqCst);
        let recovered = group.get_children().await;
        assert!(Arc::ptr_eq(&healthy[0], &recovered[0]));
    }

    // --- group nodes ---

    #[tokio::test]
    async fn cloudformation_group_sorts_stacks_by_name() {
        let fixture = harness();
        fixture.cloudformation.set_stacks(vec![
            summary("zeta", "CREATE_COMPLETE"),
            summary("Alpha", "UPDATE_COMPLETE"),
            summary("mid", "CREATE_COMPLETE"),
        ]);

        let region = RegionNode::new(RegionInfo::new("us-east-1"), fixture.context);
        let children = region.cloudformation().get_children().await;

        assert_eq!(
            labels(&children),
            vec![
                "Alpha [UPDATE_COMPLETE]",
                "mid [CREATE_COMPLETE]",
                "zeta [CREATE_COMPLETE]"
            ]
        );
    }

    #[tokio::test]
    async fn cloudformation_group_updates_surviving_stack_in_place() {
        let fixture = harness();
        fixture
            .cloudformation
            .set_stacks(vec![summary("app", "CREATE_IN_PROGRESS")]);

        let region = RegionNode::new(RegionInfo::new("us-east-1"), fixture.context);
        let group = region.cloudformation();
        let before = group.get_children().await;
        assert_eq!(labels(&before), vec!["app [CREATE_IN_PROGRESS]"]);

        fixture
            .cloudformation
            .set_stacks(vec![summary("app", "CREATE_COMPLETE")]);
        let after = group.get_children().await;

        assert_eq!(labels(&after), vec!["app [CREATE_COMPLETE]"]);
        assert!(Arc::ptr_eq(&before[0], &after[0]));
    }

    #[tokio::test]
    async fn empty_cloudformation_group_shows_placeholder() {
        let fixture = harness();
        let region = RegionNode::new(RegionInfo::new("us-east-1"), fixture.context);

        let children = region.cloudformation().get_children().await;

        assert_eq!(children.len(), 1);
        assert_eq!(children[0].label(), "[no stacks in this region]");
    }

    #[tokio::test]
    async fn standalone_group_lists_all_functions_sorted() {
        let fixture = harness();
        fixture.lambda.set_functions(&["b", "A", "c"]);

        let region = RegionNode::new(RegionInfo::new("us-east-1"), fixture.context);
        let children = region.standalone_functions().get_children().await;

        assert_eq!(labels(&children), vec!["A", "b", "c"]);
        assert_eq!(children[0].context_tag(), "awsRegionFunctionNode");
    }

    #[tokio::test]
    async fn zero_functions_yield_exactly_one_placeholder() {
        let fixture = harness();
        fixture.lambda.set_functions(&[]);

        let region = RegionNode::new(RegionInfo::new("us-east-1"), fixture.context);
        let children = region.standalone_functions().get_children().await;

        assert_eq!(children.len(), 1);
        assert_eq!(children[0].context_tag(), "awsPlaceholderNode");
        assert_eq!(children[0].label(), "[no functions in this region]");
    }

    // --- region collection ---

    #[test]
    fn region_collection_reconciles_selected_regions() {
        let fixture = harness();
        let collection = RegionNodeCollection::new(fixture.context);

        collection.update_children(&[RegionInfo::new("us-east-1"), RegionInfo::new("us-west-2")]);
        let first = collection.get_children();
        assert_eq!(first.len(), 2);
        let east_before = collection.get("us-east-1").unwrap();

        collection.update_children(&[RegionInfo::new("us-east-1"), RegionInfo::new("eu-west-1")]);
        let second = collection.get_children();

        let codes: Vec<String> = second.iter().map(|node| node.region_code()).collect();
        assert_eq!(codes, vec!["eu-west-1", "us-east-1"]);
        assert!(collection.get("us-west-2").is_none());
        assert!(Arc::ptr_eq(
            &east_before,
            &collection.get("us-east-1").unwrap()
        ));
    }

    #[test]
    fn region_collection_sorts_by_display_name() {
        let fixture = harness();
        let collection = RegionNodeCollection::new(fixture.context);

        collection.update_children(&[
            RegionInfo::new("us-east-1"),      // US East (N. Virginia)
            RegionInfo::new("ap-northeast-1"), // Asia Pacific (Tokyo)
            RegionInfo::new("eu-west-1"),      // Europe (Ireland)
        ]);

        let names: Vec<String> = collection
            .get_children()
            .iter()
            .map(|node| node.region_name())
            .collect();
        assert_eq!(
            names,
            vec![
                "Asia Pacific (Tokyo)",
                "Europe (Ireland)",
                "US East (N. Virginia)"
            ]
        );
    }
}
