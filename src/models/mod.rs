pub mod dataset;
pub mod upload;

pub use dataset::{
    CategoryCount, CategoryField, ChestXrayCategoriesResponse, ChestXraySample,
    ChestXraySamplesResponse, ChestXrayStatistics, DatasetListResponse, DatasetSummary,
    DistributionSlice, ImageNetClass, ImageNetClassesResponse, ImageNetSample,
    ImageNetSamplesResponse, ImageNetStatistics, KittiDataType, KittiFrame, KittiFramesResponse,
    KittiSequence, KittiSequenceDetail, KittiSequencesResponse,
};
pub use upload::{
    BatchUploadResponse, SequenceFrameRecord, SequenceUploadResponse, UploadCategory, UploadRecord,
    XrayAnalyzeResponse, XrayAnalyzeResult, XrayFileAnalysis,
};
