//! Region nodes and the top-level region collection.

use super::super::collections::update_in_place;
use super::super::context::ExplorerContext;
use super::super::node::{AwsTreeNode, CollapsibleState};
use super::super::regions::RegionInfo;
use super::cloudformation::CloudFormationGroupNode;
use super::standalone::StandaloneFunctionGroupNode;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// One selected region. Its two group children are constructed once and
/// never replaced; a region refresh only updates display attributes.
pub struct RegionNode {
    info: Mutex<RegionInfo>,
    cloudformation: Arc<CloudFormationGroupNode>,
    standalone_functions: Arc<StandaloneFunctionGroupNode>,
}

impl RegionNode {
    pub fn new(info: RegionInfo, context: Arc<ExplorerContext>) -> Self {
        let cloudformation = Arc::new(CloudFormationGroupNode::new(
            info.region_code.clone(),
            context.clone(),
        ));
        let standalone_functions = Arc::new(StandaloneFunctionGroupNode::new(
            info.region_code.clone(),
            context,
        ));

        Self {
            info: Mutex::new(info),
            cloudformation,
            standalone_functions,
        }
    }

    pub fn region_code(&self) -> String {
        self.info.lock().unwrap().region_code.clone()
    }

    pub fn region_name(&self) -> String {
        self.info.lock().unwrap().region_name.clone()
    }

    pub fn cloudformation(&self) -> Arc<CloudFormationGroupNode> {
        self.cloudformation.clone()
    }

    pub fn standalone_functions(&self) -> Arc<StandaloneFunctionGroupNode> {
        self.standalone_functions.clone()
    }

    /// Refresh display attributes from the catalog entry. The region code
    /// is the reconciliation key, so it never changes for a live node.
    pub fn update(&self, info: RegionInfo) {
        *self.info.lock().unwrap() = info;
    }
}

#[async_trait]
impl AwsTreeNode for RegionNode {
    fn label(&self) -> String {
        self.region_name()
    }

    fn tooltip(&self) -> Option<String> {
        let info = self.info.lock().unwrap();
        Some(format!("{} [{}]", info.region_name, info.region_code))
    }

    fn context_tag(&self) -> &'static str {
        "awsRegionNode"
    }

    fn state(&self) -> CollapsibleState {
        CollapsibleState::Expanded
    }

    async fn get_children(&self) -> Vec<Arc<dyn AwsTreeNode>> {
        vec![
            self.cloudformation.clone(),
            self.standalone_functions.clone(),
        ]
    }
}

/// Top-level registry of region nodes, reconciled against the user's
/// selected-region list.
///
/// Unlike every other reconciliation in the tree this one is not driven by
/// lazy expansion: the host calls [`update_children`](Self::update_children)
/// whenever the selection changes.
pub struct RegionNodeCollection {
    context: Arc<ExplorerContext>,
    region_nodes: Mutex<HashMap<String, Arc<RegionNode>>>,
}

impl RegionNodeCollection {
    pub fn new(context: Arc<ExplorerContext>) -> Self {
        Self {
            context,
            region_nodes: Mutex::new(HashMap::new()),
        }
    }

    /// Reconcile region nodes against `region_definitions`, keyed by region
    /// code. Surviving regions keep their nodes (and so their groups'
    /// cached children); deselected regions are dropped.
    pub fn update_children(&self, region_definitions: &[RegionInfo]) {
        let regions: HashMap<String, RegionInfo> = region_definitions
            .iter()
            .map(|info| (info.region_code.clone(), info.clone()))
            .collect();

        let mut region_nodes = self.region_nodes.lock().unwrap();
        update_in_place(
            &mut region_nodes,
            regions.keys().cloned(),
            |key, node| node.update(regions[key].clone()),
            |key| Arc::new(RegionNode::new(regions[key].clone(), self.context.clone())),
        );
    }

    /// Current region nodes, sorted by display name for the panel root.
    pub fn get_children(&self) -> Vec<Arc<RegionNode>> {
        let mut regions: Vec<Arc<RegionNode>> =
            self.region_nodes.lock().unwrap().values().cloned().collect();
        regions.sort_by_key(|node| node.region_name().to_lowercase());
        regions
    }

    /// Look up one region node by code.
    pub fn get(&self, region_code: &str) -> Option<Arc<RegionNode>> {
        self.region_nodes.lock().unwrap().get(region_code).cloned()
    }
}
